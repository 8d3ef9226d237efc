use prometheus::register_counter_vec;
use prometheus::CounterVec;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

// sqlx logs every statement at info
const DEFAULT_FILTER: &str = "info,sqlx=warn";

lazy_static! {
    pub static ref QUIZ_QUESTIONS_CNTR: CounterVec = register_counter_vec!(
        "trivia_quiz_questions_served_total",
        "Number of questions handed out by the quiz endpoint",
        &["category"]
    )
    .expect("quiz counter registers once");
}

/// Span lifecycle events selected by `INCLUDE_SPAN_EVENTS`.
///
/// `true` keeps the enter/exit events, `close` logs span durations, `full` logs everything.
fn span_events(setting: Option<&str>) -> FmtSpan {
    match setting.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("true") => FmtSpan::ENTER | FmtSpan::EXIT,
        Some("close") => FmtSpan::CLOSE,
        Some("full") => FmtSpan::FULL,
        _ => FmtSpan::NONE,
    }
}

/// Installs the global subscriber; filter directives come from `LOG_LEVEL`.
pub fn init_tracing() {
    let include = std::env::var("INCLUDE_SPAN_EVENTS").ok();
    let fmt_layer = fmt::layer().with_span_events(span_events(include.as_deref()));
    let filter_layer =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
