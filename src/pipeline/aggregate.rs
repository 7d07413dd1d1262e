use std::collections::{BTreeMap, BTreeSet};

use crate::constants::ALL_TYPES;
use crate::types::{CategoryCount, PastaRecord};

/// Per-category counts over the whole catalog.
///
/// Untyped records are excluded. Ordered by descending count, ties by ascending label.
pub fn category_distribution(records: &[PastaRecord]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for pasta_type in records.iter().filter_map(|r| r.pasta_type.as_deref()) {
        *counts.entry(pasta_type).or_insert(0) += 1;
    }

    let mut distribution: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    // BTreeMap already yields labels ascending, so a stable sort on count keeps ties ordered
    distribution.sort_by(|a, b| b.count.cmp(&a.count));
    distribution
}

/// Values offered by the category selector: "All" followed by the distinct labels, sorted.
pub fn category_options(records: &[PastaRecord]) -> Vec<String> {
    let labels: BTreeSet<&str> = records
        .iter()
        .filter_map(|r| r.pasta_type.as_deref())
        .collect();
    std::iter::once(ALL_TYPES)
        .chain(labels)
        .map(str::to_string)
        .collect()
}
