//! Workflow backend over HTTP.

pub mod http_backend;
