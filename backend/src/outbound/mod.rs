//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local user repository and newsletter
//! - **tracing_sinks**: `tracing`-backed registration logger and error channel
//!
//! Adapters are thin translators between domain types and their backend.
//! They contain no registration logic.

pub mod memory;
pub mod tracing_sinks;

pub use memory::{InMemoryNewsletter, InMemoryUserRepository};
pub use tracing_sinks::{TracingErrorChannel, TracingRegistrationLogger};
