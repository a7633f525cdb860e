//! P-256 public key decoding and ECDSA-over-P-256 signature verification

use crate::error::{Error, Result};
use ring::{agreement, rand::SystemRandom, signature};

/// Length, in bytes, of an uncompressed SEC1 P-256 public key (`0x04 || X || Y`).
pub const PUBLIC_KEY_LEN: usize = 65;

const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

/// A decoded, on-curve P-256 public key, kept in raw uncompressed SEC1 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(Vec<u8>);

impl PublicKey {
    /// Decodes a 65-byte uncompressed SEC1 point, validating that it lies on
    /// the P-256 curve.
    ///
    /// Fails with [`Error::Format`] if the leading byte isn't `0x04`, the
    /// length isn't 65, or the point isn't on the curve.
    pub fn decode(bytes: &[u8]) -> Result<PublicKey> {
        if bytes.len() != PUBLIC_KEY_LEN {
            return Err(Error::Format("public key must be exactly 65 bytes"));
        }
        if bytes[0] != UNCOMPRESSED_POINT_TAG {
            return Err(Error::Format(
                "public key must be an uncompressed SEC1 point (leading 0x04)",
            ));
        }
        validate_on_curve(bytes)?;
        Ok(PublicKey(bytes.to_vec()))
    }

    /// Returns the raw 65-byte uncompressed SEC1 point.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Validates that `bytes` is a point on the P-256 curve.
///
/// `ring` has no standalone "is this a valid point" entry point, so this
/// performs a throwaway ECDH agreement against a freshly generated ephemeral
/// key: `ring::agreement::agree_ephemeral` parses and validates the peer's
/// point as a documented side effect of the agreement computation, and any
/// resulting shared secret is discarded.
fn validate_on_curve(bytes: &[u8]) -> Result<()> {
    let rng = SystemRandom::new();
    let my_private = agreement::EphemeralPrivateKey::generate(&agreement::ECDH_P256, &rng)
        .map_err(|_| Error::Crypto("failed to generate ephemeral key for point validation"))?;
    let peer = agreement::UnparsedPublicKey::new(&agreement::ECDH_P256, bytes);

    agreement::agree_ephemeral(
        my_private,
        &peer,
        Error::Format("public key is not a valid point on the P-256 curve"),
        |_shared_secret| Ok(()),
    )
}

/// Verifies an ECDSA-over-P-256-SHA256 signature (DER-encoded) against a
/// message and a decoded public key.
///
/// `msg` is the exact transcript bytes the device signed, *not* a
/// pre-computed digest -- `ECDSA_P256_SHA256_ASN1` hashes it with SHA-256
/// internally as the first step of verification, matching how a U2F
/// authenticator signs it.
pub fn verify_ecdsa(msg: &[u8], der_signature: &[u8], key: &PublicKey) -> Result<()> {
    let key = signature::UnparsedPublicKey::new(&signature::ECDSA_P256_SHA256_ASN1, key.as_bytes());
    key.verify(msg, der_signature).map_err(|_| Error::Signature)
}
