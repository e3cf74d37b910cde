//! Some utilities

use std::path::PathBuf;

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// The log levels.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum LogLevel {
    #[clap(name = "error")]
    Error,
    #[clap(name = "warn")]
    Warn,
    #[clap(name = "info")]
    Info,
    #[clap(name = "debug")]
    Debug,
    #[clap(name = "trace")]
    Trace,
}

impl LogLevel {
    /// Get the `LevelFilter` for ftlog.
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// Configures ftlog to write to `./logs/<file_name>.log`, rotated daily.
pub fn configure_logger(file_name: &str, level: LevelFilter) -> Result<(LoggerGuard, PathBuf), String> {
    let root_dir = PathBuf::from(".").canonicalize().map_err(|e| e.to_string())?;
    let logs_dir = root_dir.join("logs");
    if !logs_dir.exists() {
        std::fs::create_dir(&logs_dir).map_err(|e| e.to_string())?;
    }
    let log_path = logs_dir.join(format!("{file_name}.log"));

    let writer = FileAppender::builder().path(&log_path).rotate(Period::Day).build();

    let err_path = log_path.with_extension("err.log");

    let guard = ftlog::Builder::new()
        .max_log_level(level)
        .root(writer)
        // write `Warn` and `Error` logs in ftlog::appender to `err_path` instead of `log_path`
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Warn)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}
