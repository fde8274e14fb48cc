use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "event_manager=debug,info"
    } else {
        "event_manager=info"
    }
}

/// Installs the console logger. Logs go to stderr so stdout carries only the
/// per-attendee lines and the registration report.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_span_events(FmtSpan::NONE)
        .without_time()
        .compact();

    tracing_subscriber::registry().with(filter).with(console).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_follows_verbosity() {
        assert_eq!(default_directive(false), "event_manager=info");
        assert!(default_directive(true).starts_with("event_manager=debug"));
        assert!(default_directive(true).parse::<EnvFilter>().is_ok());
    }
}
