//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repository, newsletter, logger, error channel) describe the
//! collaborators the registration workflow depends on. Each fallible port
//! exposes a strongly typed error so adapters map their failures into
//! predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod error_channel;
mod newsletter_service;
mod registration_logger;
mod user_registration;
mod user_repository;

#[cfg(test)]
pub use error_channel::MockErrorChannel;
pub use error_channel::{ErrorChannel, NoOpErrorChannel, raise};
#[cfg(test)]
pub use newsletter_service::MockNewsletterService;
pub use newsletter_service::{
    FixtureNewsletterService, NewsletterError, NewsletterService, SubscriptionReceipt,
};
#[cfg(test)]
pub use registration_logger::MockRegistrationLogger;
pub use registration_logger::{NoOpRegistrationLogger, RegistrationLogger};
pub use user_registration::{FixtureUserRegistration, UserRegistration};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
