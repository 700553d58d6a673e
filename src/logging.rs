use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::config::{Config, LogFormat, LoggingConfig};

/// `<marker> <LEVEL> [HH:MM:SS]: <fields>`
pub struct OutcomeFormatter;

impl<S, N> FormatEvent<S, N> for OutcomeFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = event.metadata().level();
        let timestamp = Local::now().format("%H:%M:%S");

        let (marker, level_str) = match *level {
            tracing::Level::TRACE => ("..", "TRACE"),
            tracing::Level::DEBUG => ("--", "DEBUG"),
            tracing::Level::INFO => ("ii", "INFO"),
            tracing::Level::WARN => ("!!", "WARN"),
            tracing::Level::ERROR => ("xx", "ERROR"),
        };

        write!(writer, "{} {} [{}]: ", marker, level_str, timestamp)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config));

    match config.format {
        LogFormat::Pretty => builder.event_format(OutcomeFormatter).try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    }
    .map_err(|e| anyhow::anyhow!(e))
    .context("failed to install tracing subscriber")
}

/// Load the config file (or defaults) and install the global subscriber.
pub fn init_from_config() -> Result<()> {
    let config = Config::load().unwrap_or_default();
    init(&config.logging)
}
