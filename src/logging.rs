// src/logging.rs

use crate::config::Config;
use crate::errors::ChatResult;
use crate::models::ApiCallLog;
use flexi_logger::{detailed_format, FileSpec, Logger, LoggerHandle};

/// Starts the file logger. The terminal belongs to the UI, so nothing is
/// written to stdout or stderr. Keep the handle alive for the whole run.
pub fn init_logging(config: &Config) -> ChatResult<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(&config.log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(&config.log_dir)
                .basename("weather-chat"),
        )
        .format(detailed_format)
        .start()?;
    Ok(handle)
}

/// Logs a chat service call.
pub fn log_api_call(log: &ApiCallLog) {
    let status = log
        .response_status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "none".to_string());

    log::info!(
        "[{}] {} - {} - Status: {} - Time: {}ms",
        log.timestamp.to_rfc3339(),
        log.endpoint,
        log.request_summary,
        status,
        log.response_time_ms
    );
}
