//! Result types produced by a successful verification

/// Produced by [`crate::verify::registration_verify`] on success.
#[derive(Clone, Debug)]
pub struct RegistrationResult {
    key_handle_b64: String,
    user_public_key_raw: [u8; crate::crypto::p256::PUBLIC_KEY_LEN],
    attestation_cert_pem: String,
}

impl RegistrationResult {
    pub(crate) fn new(
        key_handle_b64: String,
        user_public_key_raw: [u8; crate::crypto::p256::PUBLIC_KEY_LEN],
        attestation_cert_pem: String,
    ) -> RegistrationResult {
        RegistrationResult {
            key_handle_b64,
            user_public_key_raw,
            attestation_cert_pem,
        }
    }

    /// Websafe-base64 encoding of the raw key handle.
    pub fn key_handle_b64(&self) -> &str {
        &self.key_handle_b64
    }

    /// The 65-byte uncompressed SEC1 user public key.
    pub fn user_public_key_raw(&self) -> &[u8] {
        &self.user_public_key_raw
    }

    /// PEM-encoded attestation certificate.
    pub fn attestation_cert_pem(&self) -> &str {
        &self.attestation_cert_pem
    }
}

/// Produced by [`crate::verify::authentication_verify`] on success.
#[derive(Clone, Copy, Debug)]
pub struct AuthenticationResult {
    counter: u32,
    user_presence: u8,
}

impl AuthenticationResult {
    pub(crate) fn new(counter: u32, user_presence: u8) -> AuthenticationResult {
        AuthenticationResult {
            counter,
            user_presence,
        }
    }

    /// The device-maintained counter value, in host byte order.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Low bit of the device's user-presence byte. Always `1` -- a `0` value
    /// causes verification to fail with `Error::Format` before this result
    /// can be constructed.
    pub fn user_presence(&self) -> u8 {
        self.user_presence
    }

    /// `true` iff the verification succeeded (this value only exists if it
    /// did; provided for callers that prefer a boolean check).
    pub fn verified(&self) -> bool {
        true
    }
}
