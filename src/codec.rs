//! Base64 codec discipline and diagnostic hex dumping
//!
//! U2F mixes two base64 dialects on the wire: the challenge is websafe
//! (URL-safe, unpadded) while `registrationData`/`signatureData`/`clientData`
//! arrive as standard base64 from the browser's U2F JavaScript API.

use crate::error::{Error, Result};

/// Length, in raw bytes, of a freshly generated challenge.
pub const CHALLENGE_RAW_LEN: usize = 32;

/// Length, in characters, of a challenge once websafe-base64 encoded.
pub const CHALLENGE_B64U_LEN: usize = 43;

/// Encodes bytes as canonical, unpadded websafe base64 (RFC 4648 §5).
///
/// A 32-byte challenge always encodes to exactly [`CHALLENGE_B64U_LEN`]
/// characters.
pub fn websafe_encode(data: &[u8]) -> String {
    base64::encode_config(data, base64::URL_SAFE_NO_PAD)
}

/// Decodes websafe base64, accepting either padded or unpadded input.
pub fn websafe_decode<S: AsRef<[u8]>>(data: S) -> Result<Vec<u8>> {
    let data = data.as_ref();
    base64::decode_config(data, base64::URL_SAFE_NO_PAD)
        .or_else(|_| base64::decode_config(data, base64::URL_SAFE))
        .map_err(Error::from)
}

/// Decodes standard (non-websafe) base64, as transmitted by the browser for
/// `registrationData`, `signatureData`, and `clientData`.
pub fn standard_decode<S: AsRef<[u8]>>(data: S) -> Result<Vec<u8>> {
    base64::decode_config(data.as_ref(), base64::STANDARD).map_err(Error::from)
}

/// Renders a byte slice as a 16-column hex grid, for `log::trace!`
/// diagnostics, in the style of a C relying-party library's `dumpHex`.
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 3);
    for (i, byte) in data.iter().enumerate() {
        if i % 16 == 0 && i != 0 {
            out.push('\n');
        }
        out.push_str(&format!("{:02x} ", byte));
    }
    out
}
