//! Console logging helpers
//!
//! The startup line goes to stdout; everything else (access lines, warnings,
//! errors) goes to stderr so stdout stays a single predictable line.

use hyper::{Method, StatusCode};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr) {
    println!("Listening on http://{addr} ...");
}

pub fn log_request(method: &Method, path: &str, status: StatusCode) {
    eprintln!("{method} {path} -> {}", status.as_u16());
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    eprintln!("[ERROR] Failed to bind {addr}: {err}");
}
