//! JSON envelopes exchanged with the browser's U2F JavaScript API

pub mod client_data;

pub use client_data::ClientData;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Version string that appears verbatim in every outbound challenge JSON.
/// `U2F_V2` is the only version this crate speaks.
pub const U2F_VERSION: &str = "U2F_V2";

/// Inbound registration response envelope:
/// `{ "registrationData": <b64>, "clientData": <b64> }`.
#[derive(Clone, Debug, Deserialize)]
pub struct RegistrationResponse {
    #[serde(rename = "registrationData")]
    pub registration_data: String,
    #[serde(rename = "clientData")]
    pub client_data: String,
}

/// Inbound authentication response envelope:
/// `{ "signatureData": <b64>, "clientData": <b64>, "keyHandle": <b64> }`.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthenticationResponse {
    #[serde(rename = "signatureData")]
    pub signature_data: String,
    #[serde(rename = "clientData")]
    pub client_data: String,
    #[serde(rename = "keyHandle")]
    pub key_handle: String,
}

/// Outbound registration challenge:
/// `{ "challenge": <challenge>, "version": "U2F_V2", "appId": <appid> }`.
#[derive(Serialize)]
struct RegistrationChallenge<'a> {
    challenge: &'a str,
    version: &'static str,
    #[serde(rename = "appId")]
    app_id: &'a str,
}

/// Outbound authentication challenge:
/// `{ "keyHandle": <keyHandle>, "version": "U2F_V2", "challenge": <challenge>, "appId": <appid> }`.
#[derive(Serialize)]
struct AuthenticationChallenge<'a> {
    #[serde(rename = "keyHandle")]
    key_handle: &'a str,
    version: &'static str,
    challenge: &'a str,
    #[serde(rename = "appId")]
    app_id: &'a str,
}

/// Serializes a registration challenge JSON body.
pub fn registration_challenge_json(challenge: &str, app_id: &str) -> Result<String> {
    let value = RegistrationChallenge {
        challenge,
        version: U2F_VERSION,
        app_id,
    };
    Ok(serde_json::to_string(&value)?)
}

/// Serializes an authentication challenge JSON body.
pub fn authentication_challenge_json(
    challenge: &str,
    key_handle: &str,
    app_id: &str,
) -> Result<String> {
    let value = AuthenticationChallenge {
        key_handle,
        version: U2F_VERSION,
        challenge,
        app_id,
    };
    Ok(serde_json::to_string(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_response_requires_both_keys() {
        let json = r#"{"registrationData":"abc"}"#;
        assert!(serde_json::from_str::<RegistrationResponse>(json).is_err());
    }

    #[test]
    fn registration_response_parses_with_both_keys() {
        let json = r#"{"registrationData":"abc","clientData":"def"}"#;
        let parsed: RegistrationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.registration_data, "abc");
        assert_eq!(parsed.client_data, "def");
    }

    #[test]
    fn authentication_response_requires_all_three_keys() {
        let json = r#"{"signatureData":"abc","clientData":"def"}"#;
        assert!(serde_json::from_str::<AuthenticationResponse>(json).is_err());
    }

    #[test]
    fn registration_challenge_has_expected_shape_and_field_order() {
        let json = registration_challenge_json("chal", "https://example.com").unwrap();
        assert_eq!(
            json,
            r#"{"challenge":"chal","version":"U2F_V2","appId":"https://example.com"}"#
        );
    }

    #[test]
    fn authentication_challenge_has_expected_shape_and_field_order() {
        let json =
            authentication_challenge_json("chal", "keyhandle", "https://example.com").unwrap();
        assert_eq!(
            json,
            r#"{"keyHandle":"keyhandle","version":"U2F_V2","challenge":"chal","appId":"https://example.com"}"#
        );
    }
}
