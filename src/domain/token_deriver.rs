//! Deterministic token derivation from destination URLs.
//!
//! The algorithm is a wire-level contract shared with every client that
//! previews short links before saving: MD5 of the scheme-coerced URL string,
//! lowercase hex, truncated to the first 10 characters. Substituting the hash
//! function or the truncation rule breaks every previously issued short link.

use md5::{Digest, Md5};

/// Length of a short token in hex characters (40 bits of hash space).
pub const TOKEN_LEN: usize = 10;

/// Prepends `https://` when the input carries no scheme.
///
/// The check is a plain `://` substring test: canonicalization must not
/// rewrite the string in any other way, because the token is hashed over
/// exactly this value.
pub fn ensure_scheme(raw: &str) -> String {
    if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// Strategy for turning a destination URL into a short token.
///
/// Injected into [`crate::application::services::LinkService`] once at
/// startup, so an embedding host can substitute its own derivation without
/// touching the core. The default is [`Md5TokenDeriver`].
#[cfg_attr(test, mockall::automock)]
pub trait TokenDeriver: Send + Sync {
    /// Derives the token for a raw destination URL.
    ///
    /// Total and deterministic: any string input produces a token, repeated
    /// calls produce the same token.
    fn derive(&self, raw_url: &str) -> String;
}

/// Default deriver: first [`TOKEN_LEN`] hex chars of MD5 over the
/// scheme-coerced URL.
///
/// Token collisions between distinct URLs are possible within the truncated
/// space and are resolved last-write-wins by the mapping store. This is an
/// accepted property of the scheme, not something the deriver guards against.
pub struct Md5TokenDeriver;

impl TokenDeriver for Md5TokenDeriver {
    fn derive(&self, raw_url: &str) -> String {
        let coerced = ensure_scheme(raw_url);
        let digest = Md5::digest(coerced.as_bytes());
        let mut token = hex::encode(digest);
        token.truncate(TOKEN_LEN);
        token
    }
}
