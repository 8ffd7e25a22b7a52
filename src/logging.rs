use crate::error::AppError;
use log::{LevelFilter, Metadata, Record};
use once_cell::sync::OnceCell;
use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const LOG_FILE: &str = "log.txt";

#[derive(Debug)]
struct FileLogger {
    log_file: PathBuf,
    level: LevelFilter,
}

static LOGGER: OnceCell<FileLogger> = OnceCell::new();

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            let log_entry = format!("[{}] {} - {}\n", timestamp, record.level(), record.args());

            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.log_file)
            {
                let _ = file.write_all(log_entry.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

// Install the process-wide logger writing to `<log_dir>/log.txt`. Only the first call wins.
pub fn init(log_dir: &Path, level: LevelFilter) -> Result<(), AppError> {
    create_dir_all(log_dir)?;

    LOGGER
        .set(FileLogger {
            log_file: log_dir.join(LOG_FILE),
            level,
        })
        .map_err(|_| AppError::Logger("logger already initialized".to_string()))?;

    let logger = LOGGER
        .get()
        .ok_or_else(|| AppError::Logger("logger missing after initialization".to_string()))?;
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
