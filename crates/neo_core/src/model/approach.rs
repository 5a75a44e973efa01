//! Close approach record.
//!
//! # Responsibility
//! - Hold one observed pass of an object near Earth.
//! - Reference the owning object by designation and, after linking, by handle.
//!
//! # Invariants
//! - `neo_id` is `None` until catalog construction and stays `None` when no
//!   object carries `designation`.
//! - `neo_id` never owns the object; it is an index into the catalog.

use crate::model::calendar::format_epoch_minutes;
use crate::model::neo::NeoId;
use crate::model::{validate_designation, validate_measurement, RecordValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Position of a close approach inside the catalog's owned approach collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApproachId(usize);

impl ApproachId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based index in catalog construction order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A close approach as supplied by ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    /// Designation of the approaching object. Foreign key, may dangle.
    pub designation: String,
    /// Time of closest approach, Unix epoch milliseconds (UTC).
    pub time_epoch_ms: i64,
    /// Nominal approach distance in astronomical units.
    pub distance_au: f64,
    /// Velocity relative to Earth in km/s.
    pub velocity_km_s: f64,
    #[serde(skip)]
    neo_id: Option<NeoId>,
}

impl CloseApproach {
    /// Creates an unlinked approach.
    pub fn new(
        designation: impl Into<String>,
        time_epoch_ms: i64,
        distance_au: f64,
        velocity_km_s: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time_epoch_ms,
            distance_au,
            velocity_km_s,
            neo_id: None,
        }
    }

    /// Handle of the linked object, or `None` when unlinked.
    pub fn neo_id(&self) -> Option<NeoId> {
        self.neo_id
    }

    pub(crate) fn set_neo_id(&mut self, neo_id: Option<NeoId>) {
        self.neo_id = neo_id;
    }

    /// Approach time as `YYYY-MM-DD HH:MM` (UTC), or `epoch_ms=<value>` when
    /// the timestamp is outside the supported calendar range.
    pub fn time_str(&self) -> String {
        format_epoch_minutes(self.time_epoch_ms)
    }

    /// Validates fields before the record is handed to a catalog.
    ///
    /// # Errors
    /// - `EmptyDesignation` when the designation is blank.
    /// - `InvalidMeasurement` when distance or velocity is NaN, infinite or negative.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_designation(&self.designation)?;
        validate_measurement("distance_au", self.distance_au)?;
        validate_measurement("velocity_km_s", self.velocity_km_s)?;
        Ok(())
    }
}

impl Display for CloseApproach {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            self.designation,
            self.distance_au,
            self.velocity_km_s
        )
    }
}
