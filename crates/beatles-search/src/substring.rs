//! The `fuzzy` strategy: prefix and substring matching on signatures.

use beatles_core::{Catalog, Record};

/// Find records whose signature contains `signature`.
///
/// Prefix matches come first, then the remaining substring matches. Each
/// group is sorted by display title. At most `limit` records are returned.
/// An empty signature is a prefix of every entry.
pub fn fuzzy_match<'a>(catalog: &'a Catalog, signature: &str, limit: usize) -> Vec<&'a Record> {
    let mut starts = Vec::new();
    let mut contains = Vec::new();

    for (key, record) in catalog.iter() {
        if key.starts_with(signature) {
            starts.push(record);
        } else if key.contains(signature) {
            contains.push(record);
        }
    }

    if starts.is_empty() && contains.is_empty() {
        log::debug!("fuzzy match no candidates");
        return Vec::new();
    }

    starts.sort_by(|a, b| a.title.cmp(&b.title));
    contains.sort_by(|a, b| a.title.cmp(&b.title));

    log::debug!(
        "fuzzy match: total={} (prefix={}) limit={}",
        starts.len() + contains.len(),
        starts.len(),
        limit
    );
    starts.into_iter().chain(contains).take(limit).collect()
}
