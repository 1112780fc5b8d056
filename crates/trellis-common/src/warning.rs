//! Builder warnings with deduplication.
//!
//! Every operation in the builder degrades gracefully instead of failing, so
//! dropped or rewritten input is reported here rather than returned as an
//! error. Messages are always recorded; they are printed to stderr only when
//! the `diagnostics` feature is enabled.
//!
//! The record is keyed by `&'static str` pairs, so it can only ever hold the
//! fixed messages compiled into the crates. Caller-supplied values go in the
//! `detail` of [`warn_once_with_detail`], which is printed but never stored.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Global set of `(component, message)` pairs recorded so far.
static WARNED: Mutex<Option<HashSet<(&'static str, &'static str)>>> = Mutex::new(None);

/// Record a warning about normalized input (reported once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("node", "dropped attribute with an empty name");
/// ```
pub fn warn_once(component: &'static str, message: &'static str) {
    if record(component, message) {
        emit(component, message, None);
    }
}

/// Like [`warn_once`], with the offending input attached.
///
/// `detail` is only printed (with the `diagnostics` feature) the first time
/// `message` is recorded; it is not part of the record.
pub fn warn_once_with_detail(
    component: &'static str,
    message: &'static str,
    detail: &dyn fmt::Display,
) {
    if record(component, message) {
        emit(component, message, Some(detail));
    }
}

/// Returns true the first time the pair is seen.
fn record(component: &'static str, message: &'static str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert((component, message))
}

#[cfg(feature = "diagnostics")]
fn emit(component: &str, message: &str, detail: Option<&dyn fmt::Display>) {
    use owo_colors::OwoColorize;

    let line = match detail {
        Some(detail) => format!("[Trellis {component}] ⚠ {message}: {detail}"),
        None => format!("[Trellis {component}] ⚠ {message}"),
    };
    eprintln!("{}", line.yellow());
}

#[cfg(not(feature = "diagnostics"))]
const fn emit(_component: &str, _message: &str, _detail: Option<&dyn fmt::Display>) {}

/// Return every warning recorded so far as `[component] message`, sorted,
/// and clear the record.
#[must_use]
pub fn take_warnings() -> Vec<String> {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    let mut warnings: Vec<String> = guard
        .take()
        .unwrap_or_default()
        .into_iter()
        .map(|(component, message)| format!("[{component}] {message}"))
        .collect();
    warnings.sort();
    warnings
}

/// Clear all recorded warnings.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the record is process-global and tests run in parallel.
    #[test]
    fn test_warn_once_deduplicates_and_clears() {
        warn_once("test", "same message");
        warn_once("test", "same message");
        warn_once("test", "other message");

        assert_eq!(
            take_warnings(),
            vec![
                "[test] other message".to_string(),
                "[test] same message".to_string(),
            ]
        );
        assert!(take_warnings().is_empty());

        for n in 0..1_000 {
            warn_once_with_detail("test", "bad input", &n);
        }
        assert_eq!(take_warnings(), vec!["[test] bad input".to_string()]);

        warn_once("test", "message");
        clear_warnings();
        assert!(take_warnings().is_empty());
    }
}
