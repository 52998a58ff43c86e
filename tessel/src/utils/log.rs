use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

/// Build the subscriber for `level_regex`, an `EnvFilter` directive string. An invalid string
/// falls back to `debug` and the parse error is handed back so it can be reported once logging
/// works.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber + Send + Sync, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("debug")
        });
    (get_subscribers(filter), parse_err)
}

pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber + Send + Sync {
    // Standard output may carry status lines, so logs go to stderr.
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    )
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level when set.
pub fn setup_logging(level_regex: &str) {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| level_regex.to_owned());
    let (subscriber, parse_err) = parse_log_level(&level);
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
    }
    if let Some(err) = parse_err {
        tracing::error!("Invalid log level `{level}`, using debug: {err}");
    }
}
