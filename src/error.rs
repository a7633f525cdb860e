//! Top-level error type for the U2F verification core

use thiserror::Error;

/// All errors that can be observed by a caller of this crate.
///
/// There is no nested taxonomy beyond what's needed to keep a useful
/// `source()` chain -- every fallible operation in this crate eventually
/// bottoms out in one of these variants.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid argument was supplied where an initialized value is
    /// required (e.g. a verification attempted against a `Context` that is
    /// missing a field it needs).
    #[error("missing or invalid argument: {0}")]
    Memory(&'static str),

    /// A JSON envelope or `clientData` body was missing a required key, had
    /// a key of the wrong type, or did not parse as JSON at all.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The decoded `clientData.challenge` did not match the context's
    /// challenge, or a caller supplied a challenge of the wrong length to
    /// `set_challenge`.
    #[error("challenge mismatch")]
    Challenge,

    /// The decoded `clientData.origin` did not match the context's origin.
    #[error("origin mismatch")]
    Origin,

    /// A binary framing violation: wrong reserved byte, undersized buffer,
    /// invalid EC point, presence bit unset, inconsistent X.509 length, or a
    /// base64 decoding failure.
    #[error("format error: {0}")]
    Format(&'static str),

    /// ECDSA signature verification failed.
    #[error("signature verification failed")]
    Signature,

    /// A cryptographic primitive (hashing, key decoding, certificate
    /// parsing) failed for reasons unrelated to the specific point or
    /// signature under test.
    #[error("crypto error: {0}")]
    Crypto(&'static str),
}

impl From<base64::DecodeError> for Error {
    fn from(_: base64::DecodeError) -> Error {
        Error::Format("invalid base64 encoding")
    }
}

pub type Result<T> = std::result::Result<T, Error>;
