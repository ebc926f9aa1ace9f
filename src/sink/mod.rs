//! File sink: log path resolution, retrying appends, console echo.
//!
//! Appends are synchronous and unserialized across threads; concurrent
//! writers rely on the file system's append semantics plus the retry loop to
//! absorb transient contention. Each call writes one line in one append.

mod error;

pub use error::SinkError;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::config::LoggerConfig;
use crate::level::Level;

/// Base name of the information/warning/error log file.
pub(crate) const MAIN_LOG_BASE: &str = "log";
/// Base name of the debug log file.
pub(crate) const DEBUG_LOG_BASE: &str = "debug_log";
const LOG_EXTENSION: &str = "txt";

const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_millis(100);

/// Resolves the file path for `base_name` under the configured directory.
///
/// With an empty suffix this is `<dir>/<base_name>.txt`; a non-empty suffix
/// `s` is inserted before the extension as `<dir>/<base_name>_<s>.txt`.
pub fn resolve_log_path(config: &LoggerConfig, base_name: &str) -> PathBuf {
    let file_name = if config.log_file_suffix().is_empty() {
        format!("{base_name}.{LOG_EXTENSION}")
    } else {
        format!("{base_name}_{}.{LOG_EXTENSION}", config.log_file_suffix())
    };
    config.log_directory().join(file_name)
}

/// Appends `line` plus a trailing newline to the file at `path`, creating
/// the file if absent.
///
/// A failed attempt is retried after a fixed 100 ms sleep, up to 3 total
/// attempts. The error returned on exhaustion is for a caller-side console
/// diagnostic only; log calls never propagate it further.
pub fn append_line(path: &Path, line: &str) -> Result<(), SinkError> {
    let mut attempt = 1;
    loop {
        match try_append(path, line) {
            Ok(()) => return Ok(()),
            Err(_) if attempt < MAX_ATTEMPTS => {
                attempt += 1;
                thread::sleep(RETRY_DELAY);
            }
            Err(source) => {
                return Err(SinkError::AppendFailed {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}

fn try_append(path: &Path, line: &str) -> Result<(), std::io::Error> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}

/// Mirrors a formatted line to stdout with the level's color.
pub fn echo_line(level: Level, line: &str) {
    println!("{}", level.colorize(line));
}

#[cfg(test)]
mod tests {
    use super::{append_line, resolve_log_path, DEBUG_LOG_BASE, MAIN_LOG_BASE};
    use crate::config::LoggerConfig;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn path_without_suffix_uses_base_names() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig::new(dir.path());
        assert_eq!(
            resolve_log_path(&config, MAIN_LOG_BASE),
            dir.path().join("log.txt")
        );
        assert_eq!(
            resolve_log_path(&config, DEBUG_LOG_BASE),
            dir.path().join("debug_log.txt")
        );
    }

    #[test]
    fn suffix_is_inserted_before_extension() {
        let dir = tempdir().unwrap();
        let mut config = LoggerConfig::new(dir.path());
        config.set_log_file_suffix("v1");
        assert_eq!(
            resolve_log_path(&config, MAIN_LOG_BASE),
            dir.path().join("log_v1.txt")
        );
        assert_eq!(
            resolve_log_path(&config, DEBUG_LOG_BASE),
            dir.path().join("debug_log_v1.txt")
        );
        // Clearing the suffix reverts to the unsuffixed name.
        config.set_log_file_suffix("");
        assert_eq!(
            resolve_log_path(&config, MAIN_LOG_BASE),
            dir.path().join("log.txt")
        );
    }

    #[test]
    fn append_creates_file_and_accumulates_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");
        append_line(&path, "first").unwrap();
        append_line(&path, "second").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn append_into_missing_directory_exhausts_retries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent").join("log.txt");
        let err = append_line(&path, "line").unwrap_err();
        assert!(err.to_string().contains("failed to append"));
    }
}
