//! File logging through flexi_logger; the terminal belongs to the board.

use flexi_logger::{Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, WriteMode};

use crate::config::LogConfig;

const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
const MAX_FILES: usize = 3;

/// Start the logger. Keep the handle alive until exit so buffered records
/// get flushed.
pub fn init(config: &LogConfig) -> Result<LoggerHandle, FlexiLoggerError> {
    let handle = Logger::try_with_str(&config.level)?
        .log_to_file(file_spec(config))
        .rotate(
            Criterion::Size(MAX_FILE_SIZE),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()?;
    log::info!("logging to {}/{} at {}", config.dir, config.file, config.level);
    Ok(handle)
}

fn file_spec(config: &LogConfig) -> FileSpec {
    FileSpec::default()
        .basename(&config.file)
        .directory(&config.dir)
        .suppress_timestamp()
}

