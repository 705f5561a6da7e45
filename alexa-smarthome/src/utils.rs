use core::hash::Hash;

use indexmap::IndexMap;

/// Return every value occurring more than once in `items`, each reported once,
/// in order of first appearance.
pub fn find_duplicates<I, T>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    let mut counts: IndexMap<T, usize> = IndexMap::new();
    for item in items {
        *counts.entry(item).or_default() += 1;
    }

    counts
        .into_iter()
        .filter_map(|(item, count)| (count > 1).then_some(item))
        .collect()
}
