//! Relying-party verification core for FIDO U2F registration and
//! authentication ceremonies.
//!
//! This crate parses the binary `registrationData`/`signatureData` blobs a
//! U2F authenticator produces, reconstructs the exact transcript the
//! authenticator signed, and verifies that signature -- against the
//! attestation certificate embedded in a registration response, or against a
//! previously registered user public key for an authentication response.
//!
//! A [`Context`] carries the per-ceremony state (AppID, Origin, Challenge,
//! and for authentication the stored key handle and public key). Build one,
//! call [`Context::registration_challenge`] or
//! [`Context::authentication_challenge`] to get the JSON to hand the
//! browser's U2F JavaScript API, then pass what comes back to
//! [`registration_verify`] or [`authentication_verify`].
//!
//! Trust-chain validation of the attestation certificate, metadata-service
//! lookups, and transport (CTAP1/CTAP2) framing are all out of scope -- see
//! `SPEC_FULL.md` for the full boundary.

pub mod codec;
pub mod context;
pub mod crypto;
pub mod error;
pub mod framing;
pub mod json;
pub mod random;
pub mod result;
pub mod verify;

pub use context::Context;
pub use error::{Error, Result};
pub use random::{RandomSource, SystemRandomSource};
pub use result::{AuthenticationResult, RegistrationResult};
pub use verify::{authentication_verify, registration_verify};
