//! HTTP layer for IntelliAgent.
//!
//! Axum router serving the Meta webhook under `/api/meta/webhook`, the
//! server-rendered workflow page at `/`, and `/health`.

pub mod error;
pub mod handlers;
pub mod router;
pub mod view;
