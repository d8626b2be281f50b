//! Request dispatch
//!
//! Entry point for HTTP request processing: method validation, static file
//! dispatch, and the fixed-header pass applied to every outgoing response.

use crate::handler::static_files;
use crate::http::{self, dev_headers};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::path::Path;

/// Main entry point for HTTP request handling.
///
/// Routes GET and HEAD to the static file handler and rejects everything
/// else with a 405. Whatever the outcome, the fixed development headers are
/// appended before the response is handed back to hyper, so even error
/// responses carry them. Request bodies are never read, hence the generic
/// body parameter.
pub async fn handle_request<B>(
    req: Request<B>,
    root: &Path,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut response = if method == Method::GET || method == Method::HEAD {
        static_files::serve(root, &path).await
    } else {
        http::build_405_response()
    };

    dev_headers::apply(response.headers_mut());
    logger::log_request(&method, &path, response.status());

    Ok(response)
}
