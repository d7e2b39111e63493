use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

/// Builds the subscriber for `level_regex` (an `EnvFilter` directive such as
/// `info` or `wmdrag_core=trace`). An invalid directive falls back to `debug`
/// and the parse error is handed back so it can be reported.
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::builder().parse("debug").unwrap()
        });
    (get_subscribers(filter), parse_err)
}

pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber was already set.
pub fn setup_logging(level_regex: &str) -> anyhow::Result<()> {
    let (subscriber, parse_err) = parse_log_level(level_regex);
    tracing::subscriber::set_global_default(subscriber)?;
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log level {:?}, using debug: {}", level_regex, err);
    }
    Ok(())
}
