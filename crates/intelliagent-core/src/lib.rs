//! Business logic for IntelliAgent.
//!
//! This crate defines the webhook verification rules, the workflow
//! submission service and the `WorkflowBackend` port it talks through, and
//! the view model of the result card. It depends only on
//! `intelliagent-types` -- never on `intelliagent-infra` or any HTTP crate.

pub mod view;
pub mod webhook;
pub mod workflow;
