//! Configuration store shared by the instance and process-wide loggers.
//!
//! All setters apply immediately and are visible to every subsequent log
//! call; there is no buffering or deferred application. The only side effect
//! is directory creation when the log directory is set.

use std::fs;
use std::path::{Path, PathBuf};

/// Mutable configuration for a [`Logger`](crate::Logger).
///
/// Defaults: directory `"logs"`, no file suffix, debug mode off, caller info
/// on, empty message prefix and suffix.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    log_directory: PathBuf,
    file_suffix: String,
    debug_mode: bool,
    include_caller_info: bool,
    message_prefix: String,
    message_suffix: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new("logs")
    }
}

impl LoggerConfig {
    /// Creates a configuration targeting `directory`, creating it immediately.
    pub fn new(directory: impl AsRef<Path>) -> Self {
        let mut config = LoggerConfig {
            log_directory: PathBuf::new(),
            file_suffix: String::new(),
            debug_mode: false,
            include_caller_info: true,
            message_prefix: String::new(),
            message_suffix: String::new(),
        };
        config.set_log_directory(directory);
        config
    }

    /// Sets the target directory for log files and creates it (recursively)
    /// if absent. A creation failure is not reported here; a still-missing
    /// directory surfaces as a write failure on the next append attempt.
    pub fn set_log_directory(&mut self, directory: impl AsRef<Path>) {
        self.log_directory = directory.as_ref().to_path_buf();
        let _ = fs::create_dir_all(&self.log_directory);
    }

    pub fn log_directory(&self) -> &Path {
        &self.log_directory
    }

    /// Sets the token inserted before the file extension of the main and
    /// debug log file names. An empty suffix reverts to the unsuffixed names.
    pub fn set_log_file_suffix(&mut self, suffix: impl Into<String>) {
        self.file_suffix = suffix.into();
    }

    pub fn log_file_suffix(&self) -> &str {
        &self.file_suffix
    }

    /// When enabled, debug-level lines are also echoed to the console. They
    /// are written to the debug file regardless of this flag.
    pub fn enable_debug_mode(&mut self, enabled: bool) {
        self.debug_mode = enabled;
    }

    pub fn debug_mode_enabled(&self) -> bool {
        self.debug_mode
    }

    /// When enabled, each formatted line carries a descriptor of the nearest
    /// caller outside the logger's own code.
    pub fn set_include_caller_info(&mut self, enabled: bool) {
        self.include_caller_info = enabled;
    }

    pub fn include_caller_info(&self) -> bool {
        self.include_caller_info
    }

    /// Literal text placed before every message body, inside the
    /// timestamp/level envelope.
    pub fn set_message_prefix(&mut self, prefix: impl Into<String>) {
        self.message_prefix = prefix.into();
    }

    pub fn message_prefix(&self) -> &str {
        &self.message_prefix
    }

    /// Literal text placed after every message body.
    pub fn set_message_suffix(&mut self, suffix: impl Into<String>) {
        self.message_suffix = suffix.into();
    }

    pub fn message_suffix(&self) -> &str {
        &self.message_suffix
    }
}
