//! In-memory catalog linking objects to their close approaches.
//!
//! # Responsibility
//! - Own both record collections for the lifetime of the catalog.
//! - Index objects by designation and by name.
//! - Expose lazy, predicate-filtered iteration over close approaches.
//!
//! # Invariants
//! - Linking runs exactly once, inside `NeoCatalog::new`.
//! - The catalog is read-only after construction.
//! - Lookups and queries never fail; absence is reported as `None` or as an
//!   empty iteration.

mod neo_catalog;
mod query;
mod view;

pub use neo_catalog::NeoCatalog;
pub use query::{ApproachFilter, Query, NO_FILTERS};
pub use view::{ApproachRef, NeoRef};
