//! Request handler module
//!
//! Dispatches incoming requests to static file serving and stamps the fixed
//! development headers onto every response.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
