//! Text comparison policy for the `Name`, `Author` and `LastUpdated` columns
//!
//! Missing and empty values are equivalent and always compare after any
//! present value. Present values use ordinal ordering, so the result does not
//! depend on the current locale. Timestamps are compared as text.

use std::cmp::Ordering;

/// Compare two optional text values, placing missing or empty values last.
#[inline]
pub fn compare_text(x: Option<&str>, y: Option<&str>) -> Ordering {
    let x = x.filter(|s| !s.is_empty());
    let y = y.filter(|s| !s.is_empty());

    match (x, y) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less, // Present values come first
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
