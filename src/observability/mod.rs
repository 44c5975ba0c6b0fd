//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; the request id flows through
//!   middleware into handler log entries
//! - Metrics are cheap (atomic increments) and exported for Prometheus

pub mod metrics;
