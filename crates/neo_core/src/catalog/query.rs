//! Lazy filtered iteration over catalog approaches.

use crate::catalog::view::ApproachRef;
use crate::catalog::NeoCatalog;
use crate::model::approach::{ApproachId, CloseApproach};
use std::iter::{Enumerate, FusedIterator};
use std::slice::Iter;

/// Boxed predicate over one close approach.
///
/// Use this when a query mixes filters of different closure types.
pub type ApproachFilter = Box<dyn Fn(&ApproachRef<'_>) -> bool>;

/// Empty filter list; `catalog.query(NO_FILTERS)` yields every approach.
pub const NO_FILTERS: &[ApproachFilter] = &[];

/// Iterator returned by [`NeoCatalog::query`].
///
/// Holds only borrows, so dropping it mid-way needs no cleanup.
pub struct Query<'a, 'f, F> {
    catalog: &'a NeoCatalog,
    approaches: Enumerate<Iter<'a, CloseApproach>>,
    filters: &'f [F],
}

impl<'a, 'f, F> Query<'a, 'f, F> {
    pub(crate) fn new(catalog: &'a NeoCatalog, filters: &'f [F]) -> Self {
        Self {
            catalog,
            approaches: catalog.approach_slice().iter().enumerate(),
            filters,
        }
    }
}

impl<'a, F> Iterator for Query<'a, '_, F>
where
    F: Fn(&ApproachRef<'_>) -> bool,
{
    type Item = ApproachRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let catalog = self.catalog;
        let filters = self.filters;

        self.approaches
            .by_ref()
            .map(|(index, approach)| ApproachRef::new(catalog, ApproachId::new(index), approach))
            .find(|candidate| filters.iter().all(|filter| filter(candidate)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.filters.is_empty() {
            self.approaches.size_hint()
        } else {
            (0, self.approaches.size_hint().1)
        }
    }
}

impl<F> FusedIterator for Query<'_, '_, F> where F: Fn(&ApproachRef<'_>) -> bool {}

impl<F> Clone for Query<'_, '_, F> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog,
            approaches: self.approaches.clone(),
            filters: self.filters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NO_FILTERS;
    use crate::catalog::{ApproachRef, NeoCatalog};
    use crate::model::approach::CloseApproach;
    use std::cell::Cell;

    fn catalog_with_distances(distances: &[f64]) -> NeoCatalog {
        let approaches = distances
            .iter()
            .map(|&distance| CloseApproach::new("1", 0, distance, 5.0))
            .collect();
        NeoCatalog::new(Vec::new(), approaches)
    }

    #[test]
    fn unfiltered_size_hint_is_exact() {
        let catalog = catalog_with_distances(&[0.1, 0.2, 0.3]);
        let mut query = catalog.query(NO_FILTERS);
        assert_eq!(query.size_hint(), (3, Some(3)));
        query.next();
        assert_eq!(query.size_hint(), (2, Some(2)));
    }

    #[test]
    fn evaluation_stops_at_first_failing_filter() {
        let catalog = catalog_with_distances(&[0.1, 0.5, 0.9]);
        let second_calls = Cell::new(0);
        let first = |approach: &ApproachRef<'_>| approach.distance_au < 0.4;
        let second = |_: &ApproachRef<'_>| {
            second_calls.set(second_calls.get() + 1);
            true
        };
        let filters: Vec<Box<dyn Fn(&ApproachRef<'_>) -> bool + '_>> =
            vec![Box::new(first), Box::new(second)];

        let matched = catalog.query(&filters).count();

        assert_eq!(matched, 1);
        assert_eq!(second_calls.get(), 1);
    }

    #[test]
    fn cloned_query_resumes_independently() {
        let catalog = catalog_with_distances(&[0.1, 0.2]);
        let mut query = catalog.query(NO_FILTERS);
        query.next();
        let rest: Vec<f64> = query.clone().map(|a| a.distance_au).collect();
        assert_eq!(rest, vec![0.2]);
        assert_eq!(query.count(), 1);
    }
}
