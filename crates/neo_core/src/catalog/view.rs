//! Borrowed record views that resolve link handles through the catalog.

use crate::catalog::NeoCatalog;
use crate::model::approach::{ApproachId, CloseApproach};
use crate::model::neo::{NearEarthObject, NeoId};
use std::fmt::{Debug, Formatter};
use std::ops::Deref;

/// A near-Earth object borrowed from a catalog.
///
/// Dereferences to [`NearEarthObject`] and can walk its linked approaches.
#[derive(Clone, Copy)]
pub struct NeoRef<'a> {
    catalog: &'a NeoCatalog,
    id: NeoId,
    neo: &'a NearEarthObject,
}

impl<'a> NeoRef<'a> {
    pub(crate) fn new(catalog: &'a NeoCatalog, id: NeoId, neo: &'a NearEarthObject) -> Self {
        Self { catalog, id, neo }
    }

    pub fn id(&self) -> NeoId {
        self.id
    }

    /// Underlying record with the catalog's lifetime.
    pub fn record(&self) -> &'a NearEarthObject {
        self.neo
    }

    /// Close approaches linked to this object, in input order.
    pub fn approaches(&self) -> impl ExactSizeIterator<Item = ApproachRef<'a>> + 'a {
        let catalog = self.catalog;
        self.neo
            .approach_ids()
            .iter()
            .map(move |&id| ApproachRef::new(catalog, id, catalog.approach_record(id)))
    }
}

impl Deref for NeoRef<'_> {
    type Target = NearEarthObject;

    fn deref(&self) -> &Self::Target {
        self.neo
    }
}

impl Debug for NeoRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeoRef")
            .field("id", &self.id)
            .field("neo", self.neo)
            .finish()
    }
}

/// A close approach borrowed from a catalog.
///
/// Dereferences to [`CloseApproach`] and resolves the back-reference to its
/// object. This is the value filter predicates receive.
#[derive(Clone, Copy)]
pub struct ApproachRef<'a> {
    catalog: &'a NeoCatalog,
    id: ApproachId,
    approach: &'a CloseApproach,
}

impl<'a> ApproachRef<'a> {
    pub(crate) fn new(
        catalog: &'a NeoCatalog,
        id: ApproachId,
        approach: &'a CloseApproach,
    ) -> Self {
        Self {
            catalog,
            id,
            approach,
        }
    }

    pub fn id(&self) -> ApproachId {
        self.id
    }

    /// Underlying record with the catalog's lifetime.
    pub fn record(&self) -> &'a CloseApproach {
        self.approach
    }

    /// Linked object, or `None` when no object carries this designation.
    pub fn neo(&self) -> Option<NeoRef<'a>> {
        self.approach
            .neo_id()
            .and_then(|neo_id| self.catalog.neo(neo_id))
    }
}

impl Deref for ApproachRef<'_> {
    type Target = CloseApproach;

    fn deref(&self) -> &Self::Target {
        self.approach
    }
}

impl Debug for ApproachRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApproachRef")
            .field("id", &self.id)
            .field("approach", self.approach)
            .finish()
    }
}
