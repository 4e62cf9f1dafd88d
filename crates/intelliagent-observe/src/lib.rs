//! Observability for IntelliAgent: tracing subscriber setup with optional
//! JSON output and OpenTelemetry export.

pub mod tracing_setup;
