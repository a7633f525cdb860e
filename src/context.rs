//! Per-ceremony state: AppID, Origin, Challenge, and (for authentication)
//! the key handle and stored user public key

use crate::{
    codec::{self, CHALLENGE_B64U_LEN, CHALLENGE_RAW_LEN},
    crypto::p256::PublicKey,
    error::{Error, Result},
    json,
    random::{RandomSource, SystemRandomSource},
};

/// Holds the state of a single registration or authentication ceremony.
///
/// A `Context` is not safe for concurrent use -- it's a plain mutable
/// container. Independent contexts on independent threads are fine.
/// Mixing registration and authentication fields on the same context is
/// legal (the same context can be reused); each verification only consumes
/// the fields it needs.
pub struct Context {
    app_id: Option<String>,
    origin: Option<String>,
    challenge: Option<String>,
    key_handle: Option<String>,
    user_public_key: Option<PublicKey>,
    random: Box<dyn RandomSource>,
}

impl Default for Context {
    fn default() -> Context {
        Context::new()
    }
}

impl Context {
    /// Creates a fresh, empty context using the default (system) random
    /// source.
    pub fn new() -> Context {
        Context::with_random_source(Box::new(SystemRandomSource::default()))
    }

    /// Creates a fresh, empty context backed by a caller-supplied random
    /// source, for testing or platform integration.
    pub fn with_random_source(random: Box<dyn RandomSource>) -> Context {
        Context {
            app_id: None,
            origin: None,
            challenge: None,
            key_handle: None,
            user_public_key: None,
            random,
        }
    }

    /// Sets the challenge. Must be exactly [`CHALLENGE_B64U_LEN`] (43)
    /// characters long.
    pub fn set_challenge<S: Into<String>>(&mut self, challenge: S) -> Result<()> {
        let challenge = challenge.into();
        if challenge.len() != CHALLENGE_B64U_LEN {
            return Err(Error::Challenge);
        }
        self.challenge = Some(challenge);
        Ok(())
    }

    /// Sets the relying party's AppID.
    pub fn set_app_id<S: Into<String>>(&mut self, app_id: S) {
        self.app_id = Some(app_id.into());
    }

    /// Sets the expected browser origin.
    pub fn set_origin<S: Into<String>>(&mut self, origin: S) {
        self.origin = Some(origin.into());
    }

    /// Sets the websafe-base64 key handle to authenticate against.
    pub fn set_key_handle<S: Into<String>>(&mut self, key_handle: S) {
        self.key_handle = Some(key_handle.into());
    }

    /// Sets (and eagerly decodes) the stored user public key, as returned by
    /// a prior registration.
    ///
    /// Fails with [`Error::Format`] if `bytes` is not a valid uncompressed
    /// P-256 point.
    pub fn set_public_key(&mut self, bytes: &[u8]) -> Result<()> {
        self.user_public_key = Some(PublicKey::decode(bytes)?);
        Ok(())
    }

    pub(crate) fn app_id(&self) -> Result<&str> {
        self.app_id
            .as_deref()
            .ok_or(Error::Memory("app_id is not set"))
    }

    pub(crate) fn origin(&self) -> Result<&str> {
        self.origin
            .as_deref()
            .ok_or(Error::Memory("origin is not set"))
    }

    pub(crate) fn challenge(&self) -> Result<&str> {
        self.challenge
            .as_deref()
            .ok_or(Error::Memory("challenge is not set"))
    }

    pub(crate) fn key_handle(&self) -> Result<&str> {
        self.key_handle
            .as_deref()
            .ok_or(Error::Memory("key_handle is not set"))
    }

    pub(crate) fn user_public_key(&self) -> Result<&PublicKey> {
        self.user_public_key
            .as_ref()
            .ok_or(Error::Memory("user_public_key is not set"))
    }

    /// Generates a new challenge from [`CHALLENGE_RAW_LEN`] random bytes if
    /// one isn't already set; otherwise the existing challenge is reused.
    fn ensure_challenge(&mut self) -> Result<()> {
        if self.challenge.is_some() {
            return Ok(());
        }
        let mut raw = [0u8; CHALLENGE_RAW_LEN];
        self.random.fill(&mut raw)?;
        self.challenge = Some(codec::websafe_encode(&raw));
        Ok(())
    }

    /// Builds the registration challenge JSON, generating a challenge first
    /// if none is set.
    pub fn registration_challenge(&mut self) -> Result<String> {
        self.ensure_challenge()?;
        json::registration_challenge_json(self.challenge()?, self.app_id()?)
    }

    /// Builds the authentication challenge JSON. Requires `key_handle` to
    /// already be set.
    pub fn authentication_challenge(&mut self) -> Result<String> {
        let _ = self.key_handle()?;
        self.ensure_challenge()?;
        json::authentication_challenge_json(self.challenge()?, self.key_handle()?, self.app_id()?)
    }
}
