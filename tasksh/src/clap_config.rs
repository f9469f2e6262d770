// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{ArgAction, Args, Parser, ValueEnum};
use tasksh_readline::{DEFAULT_LOG_FILE_PATH, TracingConfig};
use tracing_core::LevelFilter;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "tasksh")]
#[command(about = "Interactive shell with tab completion for commands and paths")]
#[command(version)]
#[command(disable_version_flag = true)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
pub struct CLIArg {
    #[arg(short = 'v', long = "version", action = ArgAction::Version, help = "Print version")]
    pub version: Option<bool>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file (`log.txt` unless --log-file is given) for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE_PATH,
        help = "File that --enable-logging writes to."
    )]
    pub log_file: String,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = LogLevel::Debug,
        help = "Most verbose level that is logged."
    )]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl GlobalOption {
    /// `None` unless logging was asked for. The terminal is in editor mode while the
    /// shell runs, so logs only ever go to a file.
    #[must_use]
    pub fn tracing_config(&self) -> Option<TracingConfig> {
        self.enable_logging.then(|| {
            TracingConfig::new_file(Some(self.log_file.clone()), self.log_level.into())
        })
    }
}
