//! Sequence inspection and transformation

use indexmap::IndexSet;
use std::hash::Hash;

/// Largest element of `items`, or `None` when empty
///
/// Every element is compared, including the last. Elements that are
/// unordered against the running maximum (e.g. `NaN`) never replace it.
#[must_use]
pub fn find_max<T: PartialOrd + Clone>(items: &[T]) -> Option<T> {
    let (first, rest) = items.split_first()?;
    let mut max = first;
    for item in rest {
        if item > max {
            max = item;
        }
    }
    Some(max.clone())
}

/// [`find_max`] over a possibly absent list
#[must_use]
pub fn find_max_opt<T: PartialOrd + Clone>(items: Option<&[T]>) -> Option<T> {
    items.and_then(find_max)
}

/// Distinct elements of `items` in first-occurrence order
#[must_use]
pub fn remove_duplicates<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let unique: IndexSet<&T> = items.iter().collect();
    tracing::debug!(
        input = items.len(),
        output = unique.len(),
        "removed duplicates"
    );
    unique.into_iter().cloned().collect()
}
