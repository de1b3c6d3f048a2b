//! Utility functions for sorting operations

/// Reorder items in-place based on the given indices
///
/// Each index in `indices` names the element of the original slice that
/// should end up at that position.
pub fn reorder_by_indices<T: Clone>(items: &mut [T], indices: &[usize]) {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    let reordered: Vec<T> = indices.iter().map(|&idx| items[idx].clone()).collect();
    items.clone_from_slice(&reordered);
}

/// Check if a slice is already sorted according to a comparison function
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> std::cmp::Ordering,
{
    items
        .windows(2)
        .all(|w| compare(&w[0], &w[1]) != std::cmp::Ordering::Greater)
}
