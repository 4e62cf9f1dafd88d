//! Outbound side of the Meta webhook.

pub mod forwarder;
