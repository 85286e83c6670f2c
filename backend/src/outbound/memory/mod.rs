//! Process-local adapters.
//!
//! Nothing here survives the process; the adapters exist so the workflow can
//! run end to end without external services.

mod newsletter;
mod user_repository;

pub use newsletter::InMemoryNewsletter;
pub use user_repository::{InMemoryUserRepository, NAME_REQUIRED};
