//! Single-attribute comparisons against a close approach.

use crate::catalog::{ApproachFilter, ApproachRef};
use crate::model::calendar::CalendarDate;
use std::cmp::Ordering;

/// Comparison applied as `attribute <op> reference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Lt,
    Le,
    Eq,
    Ge,
    Gt,
}

impl Comparison {
    /// Returns whether `left <op> right` holds. Unordered values never hold.
    pub fn holds<T: PartialOrd>(self, left: T, right: T) -> bool {
        let Some(ordering) = left.partial_cmp(&right) else {
            return false;
        };
        match self {
            Self::Lt => ordering == Ordering::Less,
            Self::Le => ordering != Ordering::Greater,
            Self::Eq => ordering == Ordering::Equal,
            Self::Ge => ordering != Ordering::Less,
            Self::Gt => ordering == Ordering::Greater,
        }
    }
}

/// Compares one attribute of an approach (or of its linked object).
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeFilter {
    /// UTC calendar day of the approach. Timestamps with no calendar day never match.
    Date(Comparison, CalendarDate),
    /// Approach distance in au.
    Distance(Comparison, f64),
    /// Relative velocity in km/s.
    Velocity(Comparison, f64),
    /// Diameter of the linked object in km.
    Diameter(Comparison, f64),
    /// Hazard flag of the linked object.
    Hazardous(bool),
}

impl AttributeFilter {
    pub fn matches(&self, approach: &ApproachRef<'_>) -> bool {
        match *self {
            Self::Date(comparison, date) => CalendarDate::from_epoch_ms(approach.time_epoch_ms)
                .is_some_and(|day| comparison.holds(day, date)),
            Self::Distance(comparison, value) => comparison.holds(approach.distance_au, value),
            Self::Velocity(comparison, value) => comparison.holds(approach.velocity_km_s, value),
            Self::Diameter(comparison, value) => approach
                .neo()
                .and_then(|neo| neo.diameter_km)
                .is_some_and(|diameter_km| comparison.holds(diameter_km, value)),
            Self::Hazardous(expected) => approach
                .neo()
                .is_some_and(|neo| neo.hazardous == expected),
        }
    }

    /// Boxes this filter as a query predicate.
    pub fn into_filter(self) -> ApproachFilter {
        Box::new(move |approach: &ApproachRef<'_>| self.matches(approach))
    }
}
