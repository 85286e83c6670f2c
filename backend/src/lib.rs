//! User registration with coded-error normalisation.
//!
//! The [`domain`] module holds the workflow and the ports it depends on;
//! [`outbound`] provides process-local and `tracing`-backed adapters; and
//! [`telemetry`] installs the subscriber those adapters write to.

pub mod domain;
pub mod outbound;
pub mod telemetry;

pub use domain::{CodedError, RegistrationResult, RegistrationService};
