//! Short token derivation.
//!
//! Tokens are `prefix + |hash(url)|` where `hash` is the classic 32-bit
//! polynomial string hash (`h = 31 * h + unit` over UTF-16 code units,
//! wrapping on overflow). It is stable and cheap, and it collides: two
//! different URLs can map to the same token.

/// Prefix used when the config does not set one.
pub const DEFAULT_TOKEN_PREFIX: &str = "short.ly/";

/// 32-bit polynomial hash over the UTF-16 code units of `s`.
///
/// Must stay stable: re-shortening a URL has to reproduce the token that is
/// already in the mappings file.
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Derive the short token for `url`.
///
/// Uses the unsigned magnitude of the hash, so `i32::MIN` becomes
/// `2147483648` rather than staying negative.
pub fn derive_token(prefix: &str, url: &str) -> String {
    format!("{}{}", prefix, string_hash(url).unsigned_abs())
}
