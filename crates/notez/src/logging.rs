//! File-based logging for the session.
//!
//! The terminal belongs to the rendered list, so log output always goes to
//! rotating files under the config directory. Initialization happens once
//! per process; a second call is a no-op.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::Path;

const LOG_BASENAME: &str = "notez";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

pub fn init(log_dir: &Path, verbose: bool) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "could not create log directory {}: {}",
            log_dir.display(),
            err
        )
    })?;

    let level = if verbose { "debug" } else { default_level() };
    let logger = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level {}: {}", level, err))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("could not start logging: {}", err))?;

    let _ = LOGGER.set(logger);
    info!("logging to {}", log_dir.display());
    Ok(())
}

fn default_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn init_twice_is_a_noop() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "notez-logging-{}-{}",
            std::process::id(),
            nanos
        ));

        init(&dir, false).unwrap();
        init(&dir, true).unwrap();
    }
}
