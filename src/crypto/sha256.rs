//! Streaming SHA-256, backed by `ring`

use ring::digest;

/// Length, in bytes, of a SHA-256 digest.
pub const HASH_LEN: usize = 32;

/// A streaming SHA-256 hasher.
///
/// Supports multiple `process` calls before `done`, which the transcript
/// constructors in [`crate::verify`] depend on.
pub struct Sha256 {
    ctx: digest::Context,
}

impl Sha256 {
    /// Starts a new hash.
    pub fn init() -> Sha256 {
        Sha256 {
            ctx: digest::Context::new(&digest::SHA256),
        }
    }

    /// Feeds more bytes into the running hash.
    pub fn process(&mut self, data: &[u8]) -> &mut Self {
        self.ctx.update(data);
        self
    }

    /// Finalizes the hash and returns the 32-byte digest.
    pub fn done(self) -> [u8; HASH_LEN] {
        let digest = self.ctx.finish();
        let mut out = [0u8; HASH_LEN];
        out.copy_from_slice(digest.as_ref());
        out
    }
}

/// Convenience one-shot hash of a single buffer.
pub fn sha256(data: &[u8]) -> [u8; HASH_LEN] {
    let mut hasher = Sha256::init();
    hasher.process(data);
    hasher.done()
}
