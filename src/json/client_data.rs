//! `clientData` -- the browser-synthesized JSON whose hash is signed

use serde::Deserialize;

/// Parsed `clientData`, decoded from the base64 blob transmitted alongside
/// `registrationData`/`signatureData`.
///
/// Other members the browser may include (e.g. `typ`, `cid_pubkey`) are
/// retained but not checked by [`crate::verify`] -- a caller wanting to pin
/// the `typ` field down can inspect it separately.
#[derive(Clone, Debug, Deserialize)]
pub struct ClientData {
    pub challenge: String,
    pub origin: String,
    #[serde(default, rename = "typ")]
    pub typ: Option<String>,
}
