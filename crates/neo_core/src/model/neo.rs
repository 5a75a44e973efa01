//! Near-Earth object record.
//!
//! # Responsibility
//! - Hold the identity and physical attributes of one object.
//! - Carry the ordered list of close approaches linked to it by the catalog.
//!
//! # Invariants
//! - `designation` is the primary key used for linking.
//! - An empty `name` is treated the same as no name.
//! - `approach_ids` is empty until catalog construction fills it.

use crate::model::approach::ApproachId;
use crate::model::{validate_designation, validate_measurement, RecordValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Position of an object inside the catalog's owned object collection.
///
/// Used as the non-owning back-reference from a close approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NeoId(usize);

impl NeoId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based index in catalog construction order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A near-Earth object as supplied by ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearEarthObject {
    /// Primary designation, e.g. `2000433`.
    pub designation: String,
    /// IAU name, e.g. `Eros`. Many objects have none.
    #[serde(default)]
    pub name: Option<String>,
    /// Estimated diameter in kilometers, when known.
    #[serde(default)]
    pub diameter_km: Option<f64>,
    /// Whether the object is flagged as potentially hazardous.
    #[serde(default)]
    pub hazardous: bool,
    #[serde(skip)]
    approach_ids: Vec<ApproachId>,
}

impl NearEarthObject {
    /// Creates an unnamed, non-hazardous object with unknown diameter.
    pub fn new(designation: impl Into<String>) -> Self {
        Self {
            designation: designation.into(),
            name: None,
            diameter_km: None,
            hazardous: false,
            approach_ids: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_diameter_km(mut self, diameter_km: f64) -> Self {
        self.diameter_km = Some(diameter_km);
        self
    }

    pub fn with_hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = hazardous;
        self
    }

    /// Returns the name only when it is present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Returns `designation (name)` for named objects, else the designation.
    pub fn fullname(&self) -> String {
        match self.name() {
            Some(name) => format!("{} ({name})", self.designation),
            None => self.designation.clone(),
        }
    }

    /// Handles of the close approaches linked to this object, in input order.
    pub fn approach_ids(&self) -> &[ApproachId] {
        &self.approach_ids
    }

    pub(crate) fn link_approach(&mut self, id: ApproachId) {
        self.approach_ids.push(id);
    }

    pub(crate) fn clear_approach_links(&mut self) {
        self.approach_ids.clear();
    }

    /// Validates fields before the record is handed to a catalog.
    ///
    /// # Errors
    /// - `EmptyDesignation` when the designation is blank.
    /// - `InvalidMeasurement` when a known diameter is NaN, infinite or negative.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_designation(&self.designation)?;
        if let Some(diameter_km) = self.diameter_km {
            validate_measurement("diameter_km", diameter_km)?;
        }
        Ok(())
    }
}

impl Display for NearEarthObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let hazard = if self.hazardous { "is" } else { "is not" };
        match self.diameter_km {
            Some(diameter_km) => write!(
                f,
                "NEO {} has a diameter of {diameter_km:.3} km and {hazard} potentially hazardous.",
                self.fullname()
            ),
            None => write!(
                f,
                "NEO {} has an unknown diameter and {hazard} potentially hazardous.",
                self.fullname()
            ),
        }
    }
}
