//! Message formatting: placeholder substitution and line envelope assembly.
//!
//! A formatted line looks like
//! `[YYYY-MM-DD HH:MM:SS] [LEVEL] <prefix><message><suffix>[ | <caller>]`
//! with the timestamp in local time at second precision.

pub mod caller;

use std::fmt::Display;

use chrono::Local;

use crate::config::LoggerConfig;
use crate::level::Level;

/// Timestamp layout used in line envelopes and crash report headers.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds the complete line for one log record.
///
/// Substitutes placeholders, wraps the body in the configured prefix/suffix
/// and the timestamp/level envelope, and appends the caller descriptor when
/// caller info is enabled and a caller could be resolved.
pub fn format_line(
    level: Level,
    template: &str,
    values: &[&dyn Display],
    config: &LoggerConfig,
) -> String {
    let body = substitute_placeholders(template, values);
    let mut line = format!(
        "[{}] [{}] {}{}{}",
        Local::now().format(TIMESTAMP_FORMAT),
        level.tag(),
        config.message_prefix(),
        body,
        config.message_suffix(),
    );
    if config.include_caller_info() {
        if let Some(info) = caller::resolve_nearest_caller(caller::LOGGER_SCOPES) {
            line.push_str(" | ");
            line.push_str(&info.descriptor());
        }
    }
    line
}

/// Replaces `{identifier}` tokens with the supplied values in left-to-right
/// positional order.
///
/// The identifier text is ignored; only the occurrence position matters, so
/// `{0}`, `{name}` and `{anything}` are interchangeable. Once the values run
/// out, remaining tokens are left literally in place. Extra trailing values
/// are ignored. Brace sequences that are not a word-character token (`{}`,
/// `{a b}`, a lone `{`) are literal text.
pub fn substitute_placeholders(template: &str, values: &[&dyn Display]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    let mut values = values.iter();
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let tail = &rest[open..];
        match placeholder_len(tail) {
            Some(len) => {
                match values.next() {
                    Some(value) => result.push_str(&value.to_string()),
                    // Out of values: keep the token as written.
                    None => result.push_str(&tail[..len]),
                }
                rest = &tail[len..];
            }
            None => {
                result.push('{');
                rest = &tail[1..];
            }
        }
    }
    result.push_str(rest);
    result
}

/// Byte length of a `{identifier}` token at the start of `text`, if one is
/// present. Identifiers are one or more ASCII word characters.
fn placeholder_len(text: &str) -> Option<usize> {
    let inner = text.strip_prefix('{')?;
    let end = inner.find('}')?;
    if end == 0
        || !inner[..end]
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        return None;
    }
    Some(end + 2)
}
