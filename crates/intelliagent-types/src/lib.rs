//! Shared domain types for IntelliAgent.
//!
//! This crate contains the types shared by the webhook receiver and the
//! workflow UI: webhook verification queries, workflow requests and results,
//! agent keys, configuration and their error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod error;
pub mod webhook;
pub mod workflow;
