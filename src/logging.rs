use crate::config::get_config;
use crate::errors::{NyayError, NyayResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use std::path::PathBuf;

/// Starts the file logger. The returned handle must stay alive for the
/// lifetime of the app; log output goes to a file since the terminal is
/// occupied by the UI.
pub fn init() -> NyayResult<LoggerHandle> {
    let config = get_config();

    let handle = Logger::try_with_env_or_str(&config.log_spec)
        .map_err(|e| NyayError::logging_error(format!("invalid log spec: {}", e)))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir())
                .basename("nyaysahayak"),
        )
        .start()
        .map_err(|e| NyayError::logging_error(format!("failed to start logger: {}", e)))?;

    Ok(handle)
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("nyaysahayak").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
