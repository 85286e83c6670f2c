//! Register one user against the in-memory adapters and print the result.
//!
//! Telemetry settings come from `REGISTRATION_*` environment variables and
//! configuration files; the command line only carries the user fields. The
//! process exits successfully for both outcomes because the printed result
//! has the same shape either way.

use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use registration::domain::ports::UserRegistration;
use registration::domain::{RegistrationRequest, RegistrationResult, RegistrationService};
use registration::outbound::{
    InMemoryNewsletter, InMemoryUserRepository, TracingErrorChannel, TracingRegistrationLogger,
};
use registration::telemetry::{TelemetrySettings, init_tracing};
use tokio::runtime::Builder;

/// `register-user` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "register-user",
    about = "Register a user and print the uniform registration result",
    version
)]
struct CliArgs {
    /// Name of the user; an empty name is rejected by the repository.
    #[arg(long, value_name = "name", default_value = "")]
    name: String,
    /// Email address of the user.
    #[arg(long, value_name = "email")]
    email: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();

    let settings = TelemetrySettings::load_from_iter([OsString::from("register-user")])
        .map_err(|err| eyre!("failed to load telemetry settings: {err}"))?;
    init_tracing(&settings);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to create Tokio runtime")?;
    let result = runtime.block_on(run(args));

    let payload = serde_json::to_string(&result).wrap_err("failed to serialise result")?;
    writeln!(io::stdout().lock(), "{payload}").wrap_err("failed to write result")?;
    Ok(())
}

/// Register the user described by `args` against fresh in-memory adapters.
async fn run(args: CliArgs) -> RegistrationResult {
    let service = RegistrationService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryNewsletter::new()),
        Arc::new(TracingRegistrationLogger),
        Arc::new(TracingErrorChannel),
    );
    let request = RegistrationRequest::new(args.name, args.email);
    UserRegistration::register(&service, request).await
}
