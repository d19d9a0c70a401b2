//! Immutable update helpers for a field's options list
//!
//! The store treats `options` as an opaque replacement value, so the
//! editor recomputes the whole list and submits it through an edit
//! operation. Each helper returns a fresh vector and never mutates the
//! input. An out-of-range index yields an unchanged copy.

/// Replace the option at `index` with `value`
pub fn with_replaced(options: &[String], index: usize, value: impl Into<String>) -> Vec<String> {
    let mut next = options.to_vec();
    if let Some(slot) = next.get_mut(index) {
        *slot = value.into();
    }
    next
}

/// Remove the option at `index`; later options shift down by one
pub fn with_removed(options: &[String], index: usize) -> Vec<String> {
    let mut next = options.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

/// Append a new option labeled `option <N>` where N is the new length.
///
/// N is derived from the current length at append time, not a persistent
/// counter, so deleting and re-adding options can produce duplicate
/// labels. Duplicates are permitted.
pub fn with_appended(options: &[String]) -> Vec<String> {
    let mut next = options.to_vec();
    next.push(format!("option {}", next.len() + 1));
    next
}
