//! Cryptographic primitives: SHA-256, P-256 keys, ECDSA, and X.509
//!
//! Every primitive here is delegated to an audited library (`ring`,
//! `x509-parser`, `webpki`, `pem`) -- this crate's value is the protocol
//! transcript construction in [`crate::verify`], not reimplementing crypto.

pub mod p256;
pub mod sha256;
pub mod x509;
