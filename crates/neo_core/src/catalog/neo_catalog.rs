//! Catalog construction, linking and key lookups.

use crate::catalog::query::Query;
use crate::catalog::view::{ApproachRef, NeoRef};
use crate::model::approach::{ApproachId, CloseApproach};
use crate::model::neo::{NearEarthObject, NeoId};
use log::{debug, info};
use std::collections::HashMap;

/// Indexed, queryable collection of near-Earth objects and close approaches.
///
/// Built once from already-constructed records; read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct NeoCatalog {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, NeoId>,
    by_name: HashMap<String, NeoId>,
}

impl NeoCatalog {
    /// Builds the catalog and links every approach to its object.
    ///
    /// # Contract
    /// - Duplicate designations or names: the object that comes later in
    ///   `neos` wins the map entry. Both objects stay in the collection.
    /// - Approaches whose designation matches no object stay in the
    ///   collection, unlinked.
    /// - Each object's approach list follows the order of `approaches`.
    /// - Never fails.
    pub fn new(neos: Vec<NearEarthObject>, approaches: Vec<CloseApproach>) -> Self {
        let mut catalog = Self {
            neos,
            approaches,
            by_designation: HashMap::new(),
            by_name: HashMap::new(),
        };
        catalog.index_neos();
        catalog.link_approaches();
        catalog
    }

    fn index_neos(&mut self) {
        self.by_designation.reserve(self.neos.len());

        for (index, neo) in self.neos.iter_mut().enumerate() {
            let id = NeoId::new(index);
            neo.clear_approach_links();

            if self
                .by_designation
                .insert(neo.designation.clone(), id)
                .is_some()
            {
                debug!(
                    "event=catalog_duplicate_key module=catalog key=designation value={}",
                    neo.designation
                );
            }

            if let Some(name) = neo.name() {
                if self.by_name.insert(name.to_string(), id).is_some() {
                    debug!(
                        "event=catalog_duplicate_key module=catalog key=name value={}",
                        name
                    );
                }
            }
        }
    }

    fn link_approaches(&mut self) {
        let mut unlinked = 0_usize;

        for (index, approach) in self.approaches.iter_mut().enumerate() {
            let neo_id = self.by_designation.get(&approach.designation).copied();
            approach.set_neo_id(neo_id);

            match neo_id {
                Some(neo_id) => self.neos[neo_id.index()].link_approach(ApproachId::new(index)),
                None => unlinked += 1,
            }
        }

        info!(
            "event=catalog_build module=catalog status=ok neos={} approaches={} linked={} unlinked={}",
            self.neos.len(),
            self.approaches.len(),
            self.approaches.len() - unlinked,
            unlinked
        );
    }

    /// Exact-match lookup by primary designation.
    pub fn get_by_designation(&self, designation: &str) -> Option<NeoRef<'_>> {
        self.by_designation
            .get(designation)
            .and_then(|&id| self.neo(id))
    }

    /// Exact, case-sensitive lookup by name.
    pub fn get_by_name(&self, name: &str) -> Option<NeoRef<'_>> {
        self.by_name.get(name).and_then(|&id| self.neo(id))
    }

    /// Lazily yields approaches that satisfy every filter, in input order.
    ///
    /// # Contract
    /// - An empty filter slice matches every approach.
    /// - Filters run in slice order and stop at the first `false` per approach.
    /// - Calling `query` again restarts from the first approach.
    pub fn query<'a, 'f, F>(&'a self, filters: &'f [F]) -> Query<'a, 'f, F>
    where
        F: Fn(&ApproachRef<'_>) -> bool,
    {
        Query::new(self, filters)
    }

    /// Resolves an object handle.
    ///
    /// # Contract
    /// - Handles are only meaningful for the catalog that issued them. A
    ///   handle from another catalog may resolve to an unrelated object.
    /// - Returns `None` when the handle is past the end of this catalog.
    pub fn neo(&self, id: NeoId) -> Option<NeoRef<'_>> {
        self.neos
            .get(id.index())
            .map(|neo| NeoRef::new(self, id, neo))
    }

    /// Resolves an approach handle.
    ///
    /// # Contract
    /// - Handles are only meaningful for the catalog that issued them. A
    ///   handle from another catalog may resolve to an unrelated approach.
    /// - Returns `None` when the handle is past the end of this catalog.
    pub fn approach(&self, id: ApproachId) -> Option<ApproachRef<'_>> {
        self.approaches
            .get(id.index())
            .map(|approach| ApproachRef::new(self, id, approach))
    }

    /// All objects in input order, including ones shadowed by a duplicate key.
    pub fn neos(&self) -> impl ExactSizeIterator<Item = NeoRef<'_>> {
        self.neos
            .iter()
            .enumerate()
            .map(move |(index, neo)| NeoRef::new(self, NeoId::new(index), neo))
    }

    pub fn neo_count(&self) -> usize {
        self.neos.len()
    }

    pub fn approach_count(&self) -> usize {
        self.approaches.len()
    }

    /// Number of approaches that found their object during construction.
    pub fn linked_approach_count(&self) -> usize {
        self.approaches
            .iter()
            .filter(|approach| approach.neo_id().is_some())
            .count()
    }

    pub(crate) fn approach_slice(&self) -> &[CloseApproach] {
        &self.approaches
    }

    pub(crate) fn approach_record(&self, id: ApproachId) -> &CloseApproach {
        &self.approaches[id.index()]
    }
}
