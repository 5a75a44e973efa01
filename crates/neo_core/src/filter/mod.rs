//! Predicate builders for close approach queries.
//!
//! # Responsibility
//! - Turn command-layer options into `ApproachFilter` predicates.
//! - Cap result streams with `limit`.
//!
//! # Invariants
//! - Filters on object attributes never match unlinked approaches.
//! - Comparisons involving NaN never match.

pub mod attribute;
pub mod options;

pub use attribute::{AttributeFilter, Comparison};
pub use options::{create_filters, FilterError, FilterOptions};

use std::iter::Take;

/// Yields at most `max` items; `None` or `Some(0)` means no cap.
pub fn limit<I: Iterator>(iter: I, max: Option<usize>) -> Take<I> {
    match max {
        Some(max) if max > 0 => iter.take(max),
        _ => iter.take(usize::MAX),
    }
}
