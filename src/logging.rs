use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Severity levels understood by the workflow host's log sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Execution/node identifiers injected by the invoking workflow runtime.
/// Either field may be absent; entries then carry "unknown".
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    pub execution_id: Option<String>,
    pub node_id: Option<String>,
}

/// One structured log record, serialized as a single JSON line for the host.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub execution_id: String,
    pub node_id: String,
    pub data: Value,
}

/// Build a log entry stamped with the current time.
pub fn create_log_entry(level: LogLevel, message: &str, data: Value, ctx: &ExecutionContext) -> LogEntry {
    log_entry_at(Utc::now(), level, message, data, ctx)
}

/// Explicit-timestamp variant of [`create_log_entry`] for deterministic tests.
pub fn log_entry_at(
    timestamp: DateTime<Utc>,
    level: LogLevel,
    message: &str,
    data: Value,
    ctx: &ExecutionContext,
) -> LogEntry {
    LogEntry {
        timestamp,
        level,
        message: message.to_string(),
        execution_id: ctx.execution_id.clone().unwrap_or_else(|| "unknown".to_string()),
        node_id: ctx.node_id.clone().unwrap_or_else(|| "unknown".to_string()),
        data,
    }
}

/// Build a log entry and emit it as one JSON line on stdout, where the
/// workflow host collects node output.
pub fn log_structured(level: LogLevel, message: &str, data: Value, ctx: &ExecutionContext) {
    let entry = create_log_entry(level, message, data, ctx);
    match serde_json::to_string(&entry) {
        Ok(line) => println!("{}", line),
        Err(e) => eprintln!("failed to serialize log entry: {}", e),
    }
}

/// Initializes console logging for the crate's own diagnostics.
pub fn init_logging() {
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("hms_utils=info".parse().unwrap()))
        .with(console_layer)
        .init();
}
