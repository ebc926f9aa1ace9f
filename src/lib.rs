//! Minimal leveled file logging with suffix-rotated files, colored console
//! echo, optional caller annotation and retrying appends.
//!
//! Two entry points share one design:
//! - [`Logger`], an instance logger owning its configuration (recommended);
//! - [`global`], free functions over a single shared process-wide instance.
//!
//! Information, warning and error lines go to `log.txt`, debug lines to
//! `debug_log.txt`; a configured file suffix `s` rotates these to
//! `log_s.txt` / `debug_log_s.txt`. Crash reports each get their own
//! timestamped file. Logging calls never return errors: a write that fails
//! all retry attempts degrades to a console diagnostic.
//!
//! ```no_run
//! use flatlog::Logger;
//!
//! let mut log = Logger::with_directory("logs");
//! log.set_log_file_suffix("v1");
//! log.log_information("Started {component}", &[&"server"]);
//! ```

mod config;
mod format;
mod level;
mod logger;
mod sink;

pub mod global;

pub use config::LoggerConfig;
pub use format::caller::{resolve_nearest_caller, CallerInfo};
pub use level::Level;
pub use logger::Logger;
pub use sink::SinkError;
