//! X.509 parsing sufficient to recover a DER cert's length, verify a
//! signature against it, and re-emit it as PEM
//!
//! Trust-chain validation is explicitly **not** performed here -- that
//! remains the caller's responsibility (see the crate's Non-goals).

use crate::error::{Error, Result};
use untrusted::Input;
use webpki::EndEntityCert;

/// Recovers the total length of a DER-encoded X.509 certificate from its own
/// header.
///
/// Expects the certificate to begin with `0x30 0x82 HH LL` (a SEQUENCE tag
/// with a two-byte length), as every real-world X.509 cert does. The total
/// length (tag + length bytes + content) is `(HH << 8 | LL) + 4`.
pub fn der_length(data: &[u8]) -> Result<usize> {
    if data.len() < 4 {
        return Err(Error::Format("attestation certificate header is truncated"));
    }
    if data[0] != 0x30 || data[1] != 0x82 {
        return Err(Error::Format(
            "attestation certificate is not a two-byte-length DER SEQUENCE",
        ));
    }
    let content_len = ((data[2] as usize) << 8) | (data[3] as usize);
    Ok(content_len + 4)
}

/// A parsed X.509 certificate, retained in its original DER encoding.
pub struct Certificate {
    der: Vec<u8>,
}

impl Certificate {
    /// Parses `der` as an X.509 certificate. Only structural validity is
    /// checked; the certificate chain is not validated.
    pub fn parse(der: &[u8]) -> Result<Certificate> {
        x509_parser::parse_x509_der(der)
            .map_err(|_| Error::Format("attestation certificate failed to parse as X.509"))?;
        Ok(Certificate { der: der.to_vec() })
    }

    /// Verifies an ECDSA-over-P-256-SHA256 signature using this
    /// certificate's subject public key.
    pub fn verify_signature(&self, msg: &[u8], der_signature: &[u8]) -> Result<()> {
        let cert = EndEntityCert::from(Input::from(&self.der))
            .map_err(|_| Error::Format("attestation certificate rejected by validator"))?;
        cert.verify_signature(
            &webpki::ECDSA_P256_SHA256,
            Input::from(msg),
            Input::from(der_signature),
        )
        .map_err(|_| Error::Signature)
    }

    /// Serializes the certificate back to PEM, with standard
    /// `-----BEGIN CERTIFICATE-----` delimiters and 64-character line
    /// wrapping.
    pub fn to_pem(&self) -> String {
        pem::encode(&pem::Pem {
            tag: "CERTIFICATE".to_string(),
            contents: self.der.clone(),
        })
    }

    /// Returns the original DER bytes.
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn der_length_recovers_header_declared_size() {
        let mut data = vec![0x30, 0x82, 0x01, 0x0A];
        data.extend(vec![0u8; 0x010A]);
        assert_eq!(der_length(&data).unwrap(), 0x010A + 4);
    }

    #[test]
    fn der_length_rejects_truncated_header() {
        assert!(der_length(&[0x30, 0x82]).is_err());
    }

    #[test]
    fn der_length_rejects_wrong_tag() {
        let data = [0x31, 0x82, 0x00, 0x05, 0, 0, 0, 0, 0];
        assert!(der_length(&data).is_err());
    }
}
