//! Static file serving
//!
//! Resolves request paths against the working directory and builds file,
//! directory listing, redirect, or not-found responses.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tokio::fs;

const INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];

/// Serve a request path from the directory tree rooted at `root`.
///
/// Directories are addressed with a trailing slash; a slash-less directory
/// URL gets a 301 adding it, so relative links inside served pages resolve
/// correctly. A directory without an index file gets a generated listing.
pub async fn serve(root: &Path, request_path: &str) -> Response<Full<Bytes>> {
    let decoded = percent_decode(request_path);

    let Some(file_path) = resolve(root, &decoded) else {
        return http::build_404_response();
    };

    if file_path.is_dir() {
        if !decoded.ends_with('/') {
            return http::build_redirect_response(&format!("{request_path}/"));
        }

        for index in INDEX_FILES {
            let candidate = file_path.join(index);
            if candidate.is_file() {
                return serve_file(&candidate).await;
            }
        }

        return match render_listing(&file_path, &decoded).await {
            Some(page) => http::build_listing_response(page),
            None => http::build_404_response(),
        };
    }

    serve_file(&file_path).await
}

/// Resolve a decoded request path to a filesystem path under `root`.
///
/// Returns `None` for anything that does not exist or that escapes the root
/// after canonicalization (`..` segments, symlinks pointing outside).
fn resolve(root: &Path, decoded_path: &str) -> Option<PathBuf> {
    let relative = decoded_path.trim_start_matches('/');
    let joined = root.join(relative);

    let root_canonical = root.canonicalize().ok()?;
    let canonical = joined.canonicalize().ok()?;

    if !canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {decoded_path} -> {}",
            canonical.display()
        ));
        return None;
    }

    Some(canonical)
}

async fn serve_file(path: &Path) -> Response<Full<Bytes>> {
    match fs::read(path).await {
        Ok(content) => http::build_file_response(content, mime::content_type_for(path)),
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
            http::build_404_response()
        }
    }
}

/// Render the generated HTML listing for a directory.
///
/// Entries are sorted by name, subdirectories get a trailing slash, and
/// hrefs are percent-escaped so names with spaces stay clickable.
async fn render_listing(dir: &Path, display_path: &str) -> Option<String> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(dir).await.ok()?;

    while let Some(entry) = entries.next_entry().await.ok()? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await.is_ok_and(|t| t.is_dir()) {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();

    let title = html_escape(display_path);
    let mut page = format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\">\
         <title>Directory listing for {title}</title></head>\n\
         <body>\n<h1>Directory listing for {title}</h1>\n<hr>\n<ul>\n"
    );
    for name in &names {
        let _ = writeln!(
            page,
            "<li><a href=\"{}\">{}</a></li>",
            percent_encode(name),
            html_escape(name)
        );
    }
    page.push_str("</ul>\n<hr>\n</body>\n</html>\n");

    Some(page)
}

/// Decode `%XX` escapes in a request path.
///
/// Malformed escapes pass through unchanged; decoded bytes that are not
/// valid UTF-8 are replaced rather than rejected.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = &input[i + 1..i + 3];
            if let Ok(byte) = u8::from_str_radix(hex, 16) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Percent-escape a path segment for use in a listing href.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(byte as char);
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// Escape text for embedding in the listing HTML.
fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(percent_decode("/my%20file.txt"), "/my file.txt");
        assert_eq!(percent_decode("/a%2Fb"), "/a/b");
        assert_eq!(percent_decode("/plain/path"), "/plain/path");
    }

    #[test]
    fn malformed_escapes_pass_through() {
        assert_eq!(percent_decode("/100%"), "/100%");
        assert_eq!(percent_decode("/a%zz"), "/a%zz");
        assert_eq!(percent_decode("/a%2"), "/a%2");
    }

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(percent_encode("my file.txt"), "my%20file.txt");
        assert_eq!(percent_encode("sub/"), "sub/");
        assert_eq!(percent_encode("a&b"), "a%26b");
    }

    #[test]
    fn decode_then_encode_is_stable_for_spaces() {
        let decoded = percent_decode("my%20file.txt");
        assert_eq!(percent_encode(&decoded), "my%20file.txt");
    }

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            html_escape("<script>&'\""),
            "&lt;script&gt;&amp;&#x27;&quot;"
        );
        assert_eq!(html_escape("plain.txt"), "plain.txt");
    }

    #[test]
    fn resolve_rejects_traversal() {
        // /etc exists and is outside any temp root
        let root = std::env::temp_dir();
        assert!(resolve(&root, "/../../etc/passwd").is_none());
    }

    #[test]
    fn resolve_rejects_missing_files() {
        let root = std::env::temp_dir();
        assert!(resolve(&root, "/no-such-file-anywhere.txt").is_none());
    }
}
