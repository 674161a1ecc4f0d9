//! Tracing configuration for the invite binary.
//!
//! Sets up the tracing subscriber with custom filtering to suppress noisy
//! webview events like `SelectionDidChange` that pollute the log output.
//!
//! Must be initialized BEFORE Dioxus launch to prevent dioxus-logger from
//! setting its own subscriber.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use invite_dioxus::config::LoggingConfig;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Event formatter that drops messages containing a suppressed pattern.
struct FilteringFormatter {
    inner: fmt::format::Format,
    suppressed_patterns: Vec<String>,
}

impl FilteringFormatter {
    fn new(suppressed_patterns: Vec<String>) -> Self {
        Self {
            inner: fmt::format::Format::default().with_target(false),
            suppressed_patterns,
        }
    }

    fn is_suppressed(&self, message: &str) -> bool {
        self.suppressed_patterns
            .iter()
            .any(|pattern| message.contains(pattern.as_str()))
    }
}

impl<S, N> FormatEvent<S, N> for FilteringFormatter
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
        // Format into a buffer first so the message can be inspected
        let mut message_buf = String::new();
        self.inner
            .format_event(ctx, Writer::new(&mut message_buf), event)?;

        if self.is_suppressed(&message_buf) {
            return Ok(());
        }
        write!(writer, "{message_buf}")
    }
}

/// Initialize the tracing subscriber from `LoggingConfig`.
///
/// - `RUST_LOG` overrides the configured level
/// - messages matching `suppressed_patterns` are dropped
/// - output goes to the configured log file, or stderr if it can't be created
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let log_file = config.log_file.as_ref().and_then(|path| {
        File::create(path)
            .map(|file| (path.display().to_string(), file))
            .ok()
    });

    let (writer, ansi) = match log_file {
        Some((path, file)) => {
            eprintln!("Logging to {path}");
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(io::stderr), true),
    };

    let fmt_layer = fmt::layer()
        .with_ansi(ansi)
        .with_writer(writer)
        .event_format(FilteringFormatter::new(config.suppressed_patterns.clone()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
