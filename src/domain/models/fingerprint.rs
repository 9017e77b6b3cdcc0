//! Cache-key fingerprints for logical requests.

use std::fmt;

/// Deterministic 128-bit digest identifying a logical request.
///
/// Computed over the ordered concatenation of a request's identifying
/// fields (object path, member path, method call, or raw script text), so
/// the write path can pre-seed the cache under exactly the key a
/// subsequent read computes.
///
/// This is a memoization key, not a cryptographic commitment: collisions
/// are merely improbable, which is adequate for a process-local cache.
///
/// # Examples
///
/// ```
/// use cimcache::Fingerprint;
///
/// let a = Fingerprint::of(&["ROOT\\ccm:SMS_Client=@", ".ClientVersion"]);
/// let b = Fingerprint::of(&["ROOT\\ccm:SMS_Client=@", ".ClientVersion"]);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 16]);

impl Fingerprint {
    /// Digest the identifying fields of a request, in order.
    ///
    /// Fields are hashed back to back, matching the concatenation
    /// discipline of the legacy hash key.
    pub fn of(fields: &[&str]) -> Self {
        let mut hasher = blake3::Hasher::new();
        for field in fields {
            hasher.update(field.as_bytes());
        }
        let digest = hasher.finalize();
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest.as_bytes()[..16]);
        Self(bytes)
    }

    /// Raw digest bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
