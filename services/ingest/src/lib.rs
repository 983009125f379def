//! fleet-event-stream ingestion library.
//!
//! This crate primarily ships a `fleet-ingest` binary, but we expose a small
//! library surface to enable integration testing and reuse.

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod processor;
pub mod state;
