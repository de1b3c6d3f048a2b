//! Core traits for sortable catalog records
//!
//! Field markers name a sortable property and its key type; entities opt in
//! to a field by implementing [`SortableBy`] for it, which keeps invalid
//! field/entity pairings a compile error.

/// Individual sort field with associated key type
pub trait SortFieldMarker: Copy + Send + Sync + 'static {
    /// The type of key extracted for this field
    type Key: SortKey;

    /// Stable identifier, used in logs
    const ID: &'static str;
}

/// Keys that can be compared for sorting
pub trait SortKey: Ord + Clone + Send + Sync {}

impl<T: Ord + Clone + Send + Sync> SortKey for T {}

/// Proof that an entity can produce a key for field `F`
pub trait SortableBy<F: SortFieldMarker> {
    /// Extract the comparison key for `field`
    fn extract_key(&self, field: &F) -> F::Key;
}

impl<T, F> SortableBy<F> for &T
where
    T: SortableBy<F> + ?Sized,
    F: SortFieldMarker,
{
    fn extract_key(&self, field: &F) -> F::Key {
        (**self).extract_key(field)
    }
}
