//! HTTP request handlers.

pub mod webhook;
pub mod workflow;
