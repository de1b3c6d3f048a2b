//! Strategy pattern for composable sorting
//!
//! Every strategy sorts in place and is stable: items with equal keys keep
//! their relative order, so catalog order breaks ties.

use std::fmt;
use std::marker::PhantomData;

use super::utils::{is_sorted_by, reorder_by_indices};
use super::{SortFieldMarker, SortableBy};

/// A sorting strategy over items of type `T`
pub trait SortStrategy<T>: Send + Sync {
    /// Apply this sorting strategy to the given items
    fn sort(&self, items: &mut [T]);

    /// Short label for logs
    fn describe(&self) -> &'static str;
}

/// Single field sort strategy
pub struct FieldSort<T, F>
where
    F: SortFieldMarker,
{
    /// Field to sort by
    pub field: F,
    /// Sort descending when set
    pub reverse: bool,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, F> FieldSort<T, F>
where
    T: SortableBy<F>,
    F: SortFieldMarker,
{
    /// Create a new field sort strategy
    pub fn new(field: F, reverse: bool) -> Self {
        Self {
            field,
            reverse,
            _phantom: PhantomData,
        }
    }
}

impl<T, F> fmt::Debug for FieldSort<T, F>
where
    F: SortFieldMarker,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSort")
            .field("field", &F::ID)
            .field("reverse", &self.reverse)
            .finish()
    }
}

impl<T, F> SortStrategy<T> for FieldSort<T, F>
where
    T: SortableBy<F> + Clone,
    F: SortFieldMarker,
{
    fn sort(&self, items: &mut [T]) {
        // Extract keys once; date keys involve parsing
        let mut keys: Vec<_> = items
            .iter()
            .enumerate()
            .map(|(i, item)| (i, item.extract_key(&self.field)))
            .collect();

        let compare = |a: &(usize, F::Key), b: &(usize, F::Key)| {
            if self.reverse {
                b.1.cmp(&a.1)
            } else {
                a.1.cmp(&b.1)
            }
        };

        if is_sorted_by(&keys, compare) {
            return;
        }

        // `sort_by` is stable, which the tie-break contract relies on
        keys.sort_by(compare);

        let indices: Vec<_> = keys.into_iter().map(|(i, _)| i).collect();
        reorder_by_indices(items, &indices);
    }

    fn describe(&self) -> &'static str {
        F::ID
    }
}

/// Leaves items in their incoming order
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsorted;

impl<T> SortStrategy<T> for Unsorted {
    fn sort(&self, _items: &mut [T]) {}

    fn describe(&self) -> &'static str {
        "authored"
    }
}
