//! Resolution of the nearest stack frame outside the logger's own code.
//!
//! The walk is best-effort: builds without debug info, or frames whose
//! symbols cannot be resolved, simply yield no descriptor. A missing caller
//! is never an error; the formatter just omits the caller segment.

use backtrace::Backtrace;

/// Structured descriptor of a resolved caller frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerInfo {
    /// Fully qualified path of the calling function.
    pub scope: String,
    /// Short name of the source file containing the call.
    pub file: String,
    /// 1-based source line of the call.
    pub line: u32,
}

impl CallerInfo {
    /// Renders the descriptor as it appears in a log line:
    /// `<scope> (Line <line> in <file>)`.
    pub fn descriptor(&self) -> String {
        format!("{} (Line {} in {})", self.scope, self.line, self.file)
    }
}

/// Scope prefixes that never count as the caller: the logger's own modules
/// plus the capture machinery and runtime internals that surround them.
pub(crate) const LOGGER_SCOPES: &[&str] =
    &["flatlog::", "backtrace::", "std::", "core::", "alloc::"];

/// Walks the current call stack outward and returns the first frame whose
/// symbol path does not start with any prefix in `skip_scopes`.
///
/// Frames without a resolved symbol name or without file/line metadata are
/// skipped as well. Returns `None` when no frame survives.
pub fn resolve_nearest_caller(skip_scopes: &[&str]) -> Option<CallerInfo> {
    let trace = Backtrace::new();
    for frame in trace.frames() {
        for symbol in frame.symbols() {
            let name = match symbol.name() {
                Some(name) => name.to_string(),
                None => continue,
            };
            if skip_scopes.iter().any(|scope| name.starts_with(scope)) {
                continue;
            }
            let (file, line) = match (symbol.filename(), symbol.lineno()) {
                (Some(file), Some(line)) => (file, line),
                _ => continue,
            };
            let file = file
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("<unknown>")
                .to_string();
            return Some(CallerInfo {
                scope: trim_symbol_hash(&name),
                file,
                line,
            });
        }
    }
    None
}

/// Strips the trailing `::h<hex>` disambiguation hash rustc appends to
/// mangled symbol names, leaving the plain module path of the function.
fn trim_symbol_hash(name: &str) -> String {
    if let Some(idx) = name.rfind("::h") {
        let tail = &name[idx + 3..];
        if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_hexdigit()) {
            return name[..idx].to_string();
        }
    }
    name.to_string()
}
