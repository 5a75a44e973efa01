//! Command-layer filter options and their translation into predicates.

use crate::catalog::ApproachFilter;
use crate::filter::attribute::{AttributeFilter, Comparison};
use crate::model::calendar::{CalendarDate, CalendarDateError};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

type BoundFilter = fn(Comparison, f64) -> AttributeFilter;

/// Error for option values that cannot become a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A date option is not a valid `YYYY-MM-DD` day.
    InvalidDate {
        option: &'static str,
        source: CalendarDateError,
    },
    /// A numeric bound is NaN.
    InvalidBound { option: &'static str, value: f64 },
}

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { option, source } => write!(f, "invalid `{option}`: {source}"),
            Self::InvalidBound { option, value } => {
                write!(f, "invalid `{option}`: bound must be a number, got {value}")
            }
        }
    }
}

impl Error for FilterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDate { source, .. } => Some(source),
            Self::InvalidBound { .. } => None,
        }
    }
}

/// User-facing query options. Every field is optional; unset means "no constraint".
///
/// Deserializable so a command layer can accept it as JSON.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterOptions {
    /// Exact UTC day, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// First UTC day to include, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Last UTC day to include, `YYYY-MM-DD`.
    pub end_date: Option<String>,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,
    pub hazardous: Option<bool>,
}

/// Builds one predicate per set option, in field declaration order.
///
/// Bounds are inclusive. No cross-field checks are made: an empty range
/// simply matches nothing.
///
/// # Errors
/// - `InvalidDate` when a date option is malformed or names a non-existent day.
/// - `InvalidBound` when a numeric bound is NaN.
pub fn create_filters(options: &FilterOptions) -> Result<Vec<ApproachFilter>, FilterError> {
    let mut filters = Vec::new();

    let dates = [
        ("date", &options.date, Comparison::Eq),
        ("start_date", &options.start_date, Comparison::Ge),
        ("end_date", &options.end_date, Comparison::Le),
    ];
    for (option, value, comparison) in dates {
        if let Some(value) = value {
            let date = CalendarDate::parse(value)
                .map_err(|source| FilterError::InvalidDate { option, source })?;
            filters.push(AttributeFilter::Date(comparison, date));
        }
    }

    let bounds: [(&'static str, Option<f64>, BoundFilter, Comparison); 6] = [
        ("distance_min", options.distance_min, AttributeFilter::Distance, Comparison::Ge),
        ("distance_max", options.distance_max, AttributeFilter::Distance, Comparison::Le),
        ("velocity_min", options.velocity_min, AttributeFilter::Velocity, Comparison::Ge),
        ("velocity_max", options.velocity_max, AttributeFilter::Velocity, Comparison::Le),
        ("diameter_min", options.diameter_min, AttributeFilter::Diameter, Comparison::Ge),
        ("diameter_max", options.diameter_max, AttributeFilter::Diameter, Comparison::Le),
    ];
    for (option, value, build, comparison) in bounds {
        if let Some(value) = value {
            if value.is_nan() {
                return Err(FilterError::InvalidBound { option, value });
            }
            filters.push(build(comparison, value));
        }
    }

    if let Some(hazardous) = options.hazardous {
        filters.push(AttributeFilter::Hazardous(hazardous));
    }

    Ok(filters
        .into_iter()
        .map(AttributeFilter::into_filter)
        .collect())
}
