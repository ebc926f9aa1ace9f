//! The instance logger: configuration passthroughs, the level-routed write
//! path, and the crash path.

use std::any::type_name;
use std::fmt::Display;
use std::path::Path;

use backtrace::Backtrace;
use chrono::Local;

use crate::config::LoggerConfig;
use crate::format;
use crate::level::Level;
use crate::sink;

/// A logger owning its own configuration.
///
/// Every log call is a synchronous format, append-with-retry and console
/// echo. No call ever returns an error to the application it instruments;
/// a write that fails all retry attempts degrades to a single best-effort
/// diagnostic on stderr.
#[derive(Debug, Clone)]
pub struct Logger {
    config: LoggerConfig,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Creates a logger writing to the default `logs` directory, which is
    /// created immediately if absent.
    pub fn new() -> Self {
        Logger {
            config: LoggerConfig::default(),
        }
    }

    /// Creates a logger writing to `directory`, created immediately if
    /// absent.
    pub fn with_directory(directory: impl AsRef<Path>) -> Self {
        Logger {
            config: LoggerConfig::new(directory),
        }
    }

    // Configuration passthroughs. Each takes effect on the next log call.

    pub fn set_log_directory(&mut self, directory: impl AsRef<Path>) {
        self.config.set_log_directory(directory);
    }

    pub fn log_directory(&self) -> &Path {
        self.config.log_directory()
    }

    pub fn set_log_file_suffix(&mut self, suffix: impl Into<String>) {
        self.config.set_log_file_suffix(suffix);
    }

    pub fn log_file_suffix(&self) -> &str {
        self.config.log_file_suffix()
    }

    pub fn enable_debug_mode(&mut self, enabled: bool) {
        self.config.enable_debug_mode(enabled);
    }

    pub fn debug_mode_enabled(&self) -> bool {
        self.config.debug_mode_enabled()
    }

    pub fn set_include_caller_info(&mut self, enabled: bool) {
        self.config.set_include_caller_info(enabled);
    }

    pub fn include_caller_info(&self) -> bool {
        self.config.include_caller_info()
    }

    pub fn set_message_prefix(&mut self, prefix: impl Into<String>) {
        self.config.set_message_prefix(prefix);
    }

    pub fn message_prefix(&self) -> &str {
        self.config.message_prefix()
    }

    pub fn set_message_suffix(&mut self, suffix: impl Into<String>) {
        self.config.set_message_suffix(suffix);
    }

    pub fn message_suffix(&self) -> &str {
        self.config.message_suffix()
    }

    /// Logs an information-level message to the main log file.
    pub fn log_information(&self, template: &str, values: &[&dyn Display]) {
        self.log(Level::Information, template, values);
    }

    /// Logs a warning-level message to the main log file.
    pub fn log_warning(&self, template: &str, values: &[&dyn Display]) {
        self.log(Level::Warning, template, values);
    }

    /// Logs an error-level message to the main log file.
    pub fn log_error(&self, template: &str, values: &[&dyn Display]) {
        self.log(Level::Error, template, values);
    }

    /// Logs an error-level message carrying the type and message of an
    /// underlying cause, appended to the line as `Caused by: <type>: <msg>`.
    pub fn log_error_with_cause<E: std::error::Error>(
        &self,
        cause: &E,
        template: &str,
        values: &[&dyn Display],
    ) {
        let mut line = format::format_line(Level::Error, template, values, &self.config);
        line.push_str(&format!(" | Caused by: {}: {}", type_name::<E>(), cause));
        self.write_routed(Level::Error, &line);
    }

    /// Logs a debug-level message.
    ///
    /// Debug lines always go to the debug log file; they are echoed to the
    /// console only while debug mode is enabled.
    pub fn log_debug(&self, template: &str, values: &[&dyn Display]) {
        self.log(Level::Debug, template, values);
    }

    /// Writes a crash report for `error` to its own file in the log
    /// directory, named `crash_<YYYY-MM-DD_HH-mm-ss>.txt`.
    ///
    /// The report carries the error's type name, message, `source()` chain
    /// and a captured backtrace. Crash reports bypass level routing: no
    /// console echo, no caller annotation. Two crashes within the same clock
    /// second land in the same file.
    pub fn log_crash<E: std::error::Error>(&self, error: &E) {
        let now = Local::now();
        let mut report = format!(
            "Crash occurred at {}\n{}: {}",
            now.format(format::TIMESTAMP_FORMAT),
            type_name::<E>(),
            error
        );
        let mut source = error.source();
        while let Some(cause) = source {
            report.push_str(&format!("\nCaused by: {cause}"));
            source = cause.source();
        }
        report.push_str(&format!("\n{:?}", Backtrace::new()));

        let file_name = format!("crash_{}.txt", now.format("%Y-%m-%d_%H-%M-%S"));
        let path = self.config.log_directory().join(file_name);
        if let Err(e) = sink::append_line(&path, &report) {
            eprintln!("Fallback (crash report write failed): {e}");
        }
    }

    fn log(&self, level: Level, template: &str, values: &[&dyn Display]) {
        let line = format::format_line(level, template, values, &self.config);
        self.write_routed(level, &line);
    }

    fn write_routed(&self, level: Level, line: &str) {
        let base = if level == Level::Debug {
            sink::DEBUG_LOG_BASE
        } else {
            sink::MAIN_LOG_BASE
        };
        let path = sink::resolve_log_path(&self.config, base);
        if let Err(e) = sink::append_line(&path, line) {
            // Console-only diagnostic; writing it to the file would just
            // fail again.
            eprintln!("Fallback (log write failed): {e}");
        }
        if level != Level::Debug || self.config.debug_mode_enabled() {
            sink::echo_line(level, line);
        }
    }
}
