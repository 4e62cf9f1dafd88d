//! Infrastructure layer for IntelliAgent.
//!
//! Contains the implementations behind the ports in `intelliagent-core`:
//! the config file loader and settings resolution, the HTTP workflow
//! backend client, and the webhook event forwarder.

pub mod config;
pub mod webhook;
pub mod workflow;
