//! Fixed development headers
//!
//! Every response leaves the server with permissive CORS headers and caching
//! disabled, so browser pages under active development always see fresh files
//! and can fetch them cross-origin. The headers are appended after the static
//! handler has written its own, and their order and values never vary.

use hyper::header::{HeaderMap, HeaderName, HeaderValue};

/// The headers appended to every response, in wire order.
///
/// `access-control-max-age: 0` disables preflight caching entirely, which is
/// what you want while iterating on a page.
pub const DEV_HEADERS: [(&str, &str); 5] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET"),
    (
        "access-control-allow-headers",
        "DNT,User-Agent,X-Requested-With,If-Modified-Since,Cache-Control,Content-Type,Range",
    ),
    ("access-control-max-age", "0"),
    ("cache-control", "no-cache"),
];

/// Append the fixed headers to a response header map.
///
/// Uses `append` rather than `insert` so existing entries are untouched and
/// the five headers land after them, preserving insertion order on the wire.
pub fn apply(headers: &mut HeaderMap) {
    for (name, value) in DEV_HEADERS {
        headers.append(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}
