use anyhow::Context;
use clap::Parser;
use event_manager::utils::error::ErrorSeverity;
use event_manager::utils::{logger, validation::Validate};
use event_manager::{CliConfig, EtlEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse().with_api_key_from_env();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting event_manager");
    tracing::debug!("CLI config: {:?}", config);

    config.validate().context("invalid configuration")?;

    let engine = EtlEngine::new(config);

    if let Err(e) = engine.run().await {
        tracing::error!(
            "Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
