//! Signed request construction.
//!
//! PTV authenticates requests by a `devid` query parameter naming the
//! registered developer, plus an HMAC-SHA1 signature of the full
//! request path (query string included) keyed by that developer's API
//! key, rendered as uppercase hex. The signature covers the path only,
//! never the scheme or host.

use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Compute the uppercase hex HMAC-SHA1 signature of a request path.
///
/// Pure function: the same path and key always produce the same
/// signature.
pub fn sign(path_with_devid: &str, api_key: &str) -> String {
    let mut mac =
        HmacSha1::new_from_slice(api_key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(path_with_devid.as_bytes());
    hex::encode_upper(mac.finalize().into_bytes())
}

/// Build the fully-qualified, authenticated URL for a request path.
///
/// `path` may already carry query parameters; `devid` is appended
/// with `&` in that case and `?` otherwise, then the signature of the
/// resulting string is appended.
pub fn signed_url(base_url: &str, path: &str, user_id: &str, api_key: &str) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    let path_with_devid = format!("{path}{separator}devid={user_id}");
    let signature = sign(&path_with_devid, api_key);
    format!("{base_url}{path_with_devid}&signature={signature}")
}
