use std::collections::HashSet;
use std::hash::Hash;

/// Items of `first` that also appear in `second`, in `first`'s order.
///
/// `second` is collapsed to a set for membership; repeats in `first` are kept,
/// so the count reflects how often the first student declared a shared value.
pub fn shared_items<T: Eq + Hash + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let lookup: HashSet<&T> = second.iter().collect();
    first
        .iter()
        .filter(|item| lookup.contains(item))
        .cloned()
        .collect()
}

/// Like [`shared_items`] but each shared value is reported once.
pub fn distinct_shared_items<T: Eq + Hash + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let lookup: HashSet<&T> = second.iter().collect();
    let mut seen = HashSet::new();
    first
        .iter()
        .filter(|item| lookup.contains(item) && seen.insert(*item))
        .cloned()
        .collect()
}

pub fn has_any_shared<T: Eq + Hash>(first: &[T], second: &[T]) -> bool {
    let lookup: HashSet<&T> = second.iter().collect();
    first.iter().any(|item| lookup.contains(item))
}

/// Number of distinct values across both lists.
pub fn union_len<T: Eq + Hash>(first: &[T], second: &[T]) -> usize {
    first.iter().chain(second).collect::<HashSet<_>>().len()
}
