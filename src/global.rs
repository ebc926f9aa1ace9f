//! Process-wide logger: free functions over one shared [`Logger`] instance.
//!
//! This is an opt-in convenience wrapper; the instance logger is the
//! recommended default. The shared instance is constructed with defaults on
//! first use and lives for the rest of the process. Configuration mutated
//! here is visible to every thread; each log call works on a snapshot of the
//! configuration taken at call time, so racing a configuration change
//! against a log call yields whichever ordering the lock hands them. File
//! appends themselves are not serialized across threads.
//!
//! The instance-only message prefix/suffix settings are deliberately not
//! exposed here.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::logger::Logger;

// Global static logger instance.
static LOGGER: Lazy<Mutex<Logger>> = Lazy::new(|| Mutex::new(Logger::new()));

fn with_logger<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    let mut guard = match LOGGER.lock() {
        Ok(guard) => guard,
        // A panic elsewhere must not silence logging for the whole process.
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

/// Clones the shared instance under a briefly held lock. Log calls run on
/// the clone, so appends and their retry sleeps never hold the lock and
/// never serialize other threads' log or configuration calls.
fn snapshot() -> Logger {
    with_logger(|logger| logger.clone())
}

pub fn set_log_directory(directory: impl AsRef<Path>) {
    with_logger(|logger| logger.set_log_directory(directory));
}

pub fn log_directory() -> PathBuf {
    with_logger(|logger| logger.log_directory().to_path_buf())
}

pub fn set_log_file_suffix(suffix: impl Into<String>) {
    with_logger(|logger| logger.set_log_file_suffix(suffix));
}

pub fn log_file_suffix() -> String {
    with_logger(|logger| logger.log_file_suffix().to_string())
}

pub fn enable_debug_mode(enabled: bool) {
    with_logger(|logger| logger.enable_debug_mode(enabled));
}

pub fn debug_mode_enabled() -> bool {
    with_logger(|logger| logger.debug_mode_enabled())
}

pub fn set_include_caller_info(enabled: bool) {
    with_logger(|logger| logger.set_include_caller_info(enabled));
}

pub fn include_caller_info() -> bool {
    with_logger(|logger| logger.include_caller_info())
}

pub fn log_information(template: &str, values: &[&dyn Display]) {
    snapshot().log_information(template, values);
}

pub fn log_warning(template: &str, values: &[&dyn Display]) {
    snapshot().log_warning(template, values);
}

pub fn log_error(template: &str, values: &[&dyn Display]) {
    snapshot().log_error(template, values);
}

pub fn log_error_with_cause<E: std::error::Error>(
    cause: &E,
    template: &str,
    values: &[&dyn Display],
) {
    snapshot().log_error_with_cause(cause, template, values);
}

pub fn log_debug(template: &str, values: &[&dyn Display]) {
    snapshot().log_debug(template, values);
}

pub fn log_crash<E: std::error::Error>(error: &E) {
    snapshot().log_crash(error);
}
