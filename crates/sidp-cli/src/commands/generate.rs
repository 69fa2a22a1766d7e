//! Assertion generation command.

use std::sync::Arc;

use sidp_core::{Config, FixedTimeService, RandomIdService, SystemTimeService, TimeService};
use sidp_protocol_saml::{
    Assertion, AssertionGenerator, AuthenticationToken, Principal, WebAuthenticationDetails,
};

use crate::cli::{GenerateArgs, OutputFormat};
use crate::output::{render_assertion, success};
use crate::CliResult;

/// Runs the generate command and prints the assertion to stdout.
pub fn run_generate(args: GenerateArgs, config: &Config, format: OutputFormat) -> CliResult<()> {
    let assertion = generate(&args, config)?;
    println!("{}", render_assertion(&assertion, format)?);
    success(&format!("generated assertion {}", assertion.id));
    Ok(())
}

/// Builds the assertion described by the arguments.
///
/// A pinned `--now` replaces the system clock.
pub fn generate(args: &GenerateArgs, config: &Config) -> CliResult<Assertion> {
    match args.now {
        Some(now) => generate_with(args, config, Arc::new(FixedTimeService::new(now))),
        None => generate_with(args, config, Arc::new(SystemTimeService::new())),
    }
}

fn generate_with<C: TimeService>(
    args: &GenerateArgs,
    config: &Config,
    time_service: Arc<C>,
) -> CliResult<Assertion> {
    let mut saml = config.saml.clone();
    if let Some(issuer) = &args.issuer {
        saml.issuer.clone_from(issuer);
    }
    let valid_for_seconds = args.valid_for.unwrap_or(saml.valid_for_seconds);
    let authn_instant = args
        .authn_instant
        .unwrap_or_else(|| time_service.current_date_time());

    let generator =
        AssertionGenerator::from_config(&saml, time_service, Arc::new(RandomIdService::new()))?;

    let mut details = WebAuthenticationDetails::new(args.remote_address.as_str());
    if let Some(session_id) = &args.session_id {
        details = details.with_session_id(session_id.as_str());
    }
    let token = args.authorities.iter().fold(
        AuthenticationToken::new(Principal::new(args.username.as_str()), details),
        |token, authority| token.with_authority(authority.as_str()),
    );

    tracing::debug!(
        username = %args.username,
        recipient = %args.recipient,
        valid_for_seconds,
        "generating assertion"
    );

    let assertion = generator.generate_assertion(
        &token,
        &args.recipient,
        valid_for_seconds,
        args.in_response_to.as_deref(),
        authn_instant,
    )?;
    Ok(assertion)
}
