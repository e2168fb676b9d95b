//! HTTP transport for the blog Q&A service.

pub mod http_api;

pub use http_api::HttpQaApi;
