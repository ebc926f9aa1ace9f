use colored::{ColoredString, Colorize};

/// Severity level of a single log record.
///
/// `Crash` is not routed through the normal level dispatch; crash reports go
/// to their own per-crash file and are never echoed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Information,
    Warning,
    Error,
    Debug,
    Crash,
}

impl Level {
    /// Tag text as it appears inside the bracketed line envelope.
    pub fn tag(self) -> &'static str {
        match self {
            Level::Information => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Debug => "DEBUG",
            Level::Crash => "CRASH",
        }
    }

    /// Applies this level's console color to a formatted line.
    ///
    /// The `colored` crate emits an ANSI reset after the styled text, so the
    /// terminal's prior color is restored on every path out of the print.
    pub(crate) fn colorize(self, line: &str) -> ColoredString {
        match self {
            Level::Information => line.green(),
            Level::Warning => line.yellow(),
            Level::Error => line.red(),
            Level::Debug => line.blue(),
            Level::Crash => line.normal(),
        }
    }
}
