use crate::types::{FilterCriteria, PastaRecord, SortOrder, TypeSelection};

/// Apply type filter, search and sort, in that order.
///
/// Pure and total: an empty result is a valid outcome. With `SortOrder::None`
/// the surviving records keep their catalog order.
pub fn apply(records: &[PastaRecord], criteria: &FilterCriteria) -> Vec<PastaRecord> {
    let needle = search_needle(&criteria.search_term);

    let mut result: Vec<PastaRecord> = records
        .iter()
        .filter(|record| matches_type(record, &criteria.selected_type))
        .filter(|record| needle.as_deref().map_or(true, |n| matches_search(record, n)))
        .cloned()
        .collect();

    sort_records(&mut result, criteria.sort_order);
    result
}

/// Exact, case-sensitive match on the category label. Untyped records never match a label.
pub fn matches_type(record: &PastaRecord, selection: &TypeSelection) -> bool {
    match selection {
        TypeSelection::All => true,
        TypeSelection::Only(label) => record.pasta_type.as_deref() == Some(label.as_str()),
    }
}

/// `needle` must already be lowercased.
pub fn matches_search(record: &PastaRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

// Whitespace-only terms disable search
fn search_needle(term: &str) -> Option<String> {
    if term.trim().is_empty() {
        None
    } else {
        Some(term.to_lowercase())
    }
}

/// Stable sort by lowercased name; `SortOrder::None` leaves the order untouched.
pub fn sort_records(records: &mut [PastaRecord], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::NameAscending => {
            records.sort_by_cached_key(|r| r.name.to_lowercase());
        }
        SortOrder::NameDescending => {
            records.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
        }
    }
}
