//! HTTP protocol layer
//!
//! Response construction, MIME detection, and the fixed development headers,
//! decoupled from request routing and filesystem access.

pub mod dev_headers;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_file_response, build_listing_response,
    build_redirect_response,
};
