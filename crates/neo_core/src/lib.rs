//! Near-Earth object catalog core.
//! Links close approaches to their objects once, then serves key lookups and
//! lazy, predicate-filtered scans over the approaches.

pub mod catalog;
pub mod filter;
pub mod logging;
pub mod model;

pub use catalog::{ApproachFilter, ApproachRef, NeoCatalog, NeoRef, Query, NO_FILTERS};
pub use filter::{create_filters, limit, AttributeFilter, Comparison, FilterError, FilterOptions};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::approach::{ApproachId, CloseApproach};
pub use model::calendar::{CalendarDate, CalendarDateError};
pub use model::neo::{NearEarthObject, NeoId};
pub use model::RecordValidationError;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
