//! MIME type detection
//!
//! Maps a file path's extension to a Content-Type, defaulting to
//! `application/octet-stream` for anything unrecognized.

use std::path::Path;

/// Look up the Content-Type for a file path by its extension.
///
/// Matching is case-insensitive, so `PHOTO.JPG` resolves the same as
/// `photo.jpg`.
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js" | "mjs") => "application/javascript",
        Some("json" | "map") => "application/json",
        Some("wasm") => "application/wasm",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",

        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        Some("pdf") => "application/pdf",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> &'static str {
        content_type_for(Path::new(name))
    }

    #[test]
    fn common_web_types() {
        assert_eq!(lookup("index.html"), "text/html; charset=utf-8");
        assert_eq!(lookup("style.css"), "text/css");
        assert_eq!(lookup("app.js"), "application/javascript");
        assert_eq!(lookup("bundle.js.map"), "application/json");
        assert_eq!(lookup("logo.svg"), "image/svg+xml");
    }

    #[test]
    fn extension_case_is_ignored() {
        assert_eq!(lookup("PHOTO.JPG"), "image/jpeg");
        assert_eq!(lookup("Index.HTML"), "text/html; charset=utf-8");
    }

    #[test]
    fn unknown_or_missing_extension_falls_back() {
        assert_eq!(lookup("data.xyz"), "application/octet-stream");
        assert_eq!(lookup("Makefile"), "application/octet-stream");
    }
}
