//! The verification orchestrator: `registration_verify` and `authentication_verify`
//!
//! Both flows share a prologue -- parse the JSON envelope, decode and parse
//! `clientData`, check the challenge and origin -- then diverge only in how
//! the transcript is built, which key verifies the signature, and what
//! result is emitted.
//!
//! The six-step ceremony state machine
//! (`INIT -> JSON_PARSED -> BINARY_PARSED -> EQUALITY_CHECKED ->
//! TRANSCRIPT_BUILT -> SIGNATURE_VERIFIED -> (SUCCESS | ERROR)`) is present
//! here as the sequencing of these functions' `?`-propagating calls rather
//! than as an explicit enum: any step returning `Err` drops everything
//! computed so far and the caller never sees a partial result.

use crate::{
    codec,
    context::Context,
    crypto::{p256::PUBLIC_KEY_LEN, sha256::sha256},
    error::{Error, Result},
    framing::{registration, signature},
    json::{self, AuthenticationResponse, ClientData, RegistrationResponse},
    result::{AuthenticationResult, RegistrationResult},
};

/// Registration transcript prefix byte, per the U2F raw message format.
const REGISTRATION_PREFIX: u8 = 0x00;

struct Prologue {
    client_data_bytes: Vec<u8>,
}

/// Decodes `clientData` and checks its `challenge`/`origin` against `ctx`.
///
/// Equality is byte-exact -- no normalization of either field.
fn check_client_data(ctx: &Context, client_data_b64: &str) -> Result<Prologue> {
    let client_data_bytes = codec::standard_decode(client_data_b64)?;
    let client_data: ClientData = serde_json::from_slice(&client_data_bytes)?;

    if client_data.challenge != ctx.challenge()? {
        log::debug!("u2f: challenge mismatch");
        return Err(Error::Challenge);
    }
    if client_data.origin != ctx.origin()? {
        log::debug!("u2f: origin mismatch");
        return Err(Error::Origin);
    }

    Ok(Prologue { client_data_bytes })
}

/// Verifies a U2F registration response and returns the registered
/// credential's key handle, public key, and attestation certificate.
pub fn registration_verify(ctx: &Context, response: &str) -> Result<RegistrationResult> {
    let envelope: RegistrationResponse = serde_json::from_str(response)?;

    let registration_data = codec::standard_decode(&envelope.registration_data)?;
    log::trace!(
        "u2f: registrationData:\n{}",
        codec::hex_dump(&registration_data)
    );

    let parsed = registration::parse(&registration_data)?;

    let prologue = check_client_data(ctx, &envelope.client_data)?;

    // transcript = 0x00 || SHA256(app_id) || SHA256(clientData) || key_handle || user_public_key
    let app_id_hash = sha256(ctx.app_id()?.as_bytes());
    let client_data_hash = sha256(&prologue.client_data_bytes);

    let mut transcript = Vec::with_capacity(1 + 32 + 32 + parsed.key_handle.len() + PUBLIC_KEY_LEN);
    transcript.push(REGISTRATION_PREFIX);
    transcript.extend_from_slice(&app_id_hash);
    transcript.extend_from_slice(&client_data_hash);
    transcript.extend_from_slice(&parsed.key_handle);
    transcript.extend_from_slice(parsed.user_public_key.as_bytes());

    parsed
        .attestation_certificate
        .verify_signature(&transcript, &parsed.signature)?;

    let key_handle_b64 = codec::websafe_encode(&parsed.key_handle);
    let mut user_public_key_raw = [0u8; PUBLIC_KEY_LEN];
    user_public_key_raw.copy_from_slice(parsed.user_public_key.as_bytes());
    let attestation_cert_pem = parsed.attestation_certificate.to_pem();

    Ok(RegistrationResult::new(
        key_handle_b64,
        user_public_key_raw,
        attestation_cert_pem,
    ))
}

/// Verifies a U2F authentication response against `ctx`'s stored user
/// public key and returns the device's counter and user-presence state.
pub fn authentication_verify(ctx: &Context, response: &str) -> Result<AuthenticationResult> {
    let envelope: AuthenticationResponse = serde_json::from_str(response)?;

    let signature_data = codec::standard_decode(&envelope.signature_data)?;
    log::trace!(
        "u2f: signatureData:\n{}",
        codec::hex_dump(&signature_data)
    );

    let parsed = signature::parse(&signature_data)?;

    let prologue = check_client_data(ctx, &envelope.client_data)?;

    // transcript = SHA256(app_id) || user_presence || counter || SHA256(clientData)
    let app_id_hash = sha256(ctx.app_id()?.as_bytes());
    let client_data_hash = sha256(&prologue.client_data_bytes);

    let mut transcript = Vec::with_capacity(32 + 1 + 4 + 32);
    transcript.extend_from_slice(&app_id_hash);
    transcript.push(parsed.user_presence);
    transcript.extend_from_slice(&parsed.counter.to_be_bytes());
    transcript.extend_from_slice(&client_data_hash);

    let key = ctx.user_public_key()?;
    crate::crypto::p256::verify_ecdsa(&transcript, &parsed.signature, key)?;

    Ok(AuthenticationResult::new(
        parsed.counter,
        parsed.user_presence,
    ))
}

/// Re-export so callers needing the raw challenge JSON helpers directly
/// (rather than through [`Context`]) can build their own ceremony glue.
pub use json::{authentication_challenge_json, registration_challenge_json};
