//! The `rank` strategy: exact lookup, then similarity ranking.

use beatles_core::{Catalog, Record};

use crate::similarity::ratio;

/// A catalog record paired with its similarity to the query.
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a> {
    pub ratio: f64,
    pub record: &'a Record,
}

/// Score every catalog entry against `signature`, best first.
///
/// The sort is stable, so entries with equal ratios keep catalog order.
/// Note this differs from [`crate::substring::fuzzy_match`], which orders
/// by title.
pub fn rank_all<'a>(catalog: &'a Catalog, signature: &str) -> Vec<Scored<'a>> {
    let mut scored: Vec<Scored<'a>> = catalog
        .iter()
        .map(|(key, record)| Scored {
            ratio: ratio(key, signature),
            record,
        })
        .collect();
    scored.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    scored
}

/// Find the records whose signature best resembles `signature`.
///
/// An exact signature hit short-circuits and is returned alone, whatever
/// the threshold. Otherwise only entries scoring strictly above
/// `min_ratio` are kept, in rank order, up to `limit`. A `limit` of zero
/// always yields nothing, including on an exact hit.
pub fn rank_match<'a>(
    catalog: &'a Catalog,
    signature: &str,
    min_ratio: f64,
    limit: usize,
) -> Vec<&'a Record> {
    if limit == 0 {
        return Vec::new();
    }

    if let Some(record) = catalog.lookup_exact(signature) {
        return vec![record];
    }
    log::debug!("precise match no result");

    let scored = rank_all(catalog, signature);
    let candidates: Vec<&Record> = scored
        .iter()
        .take_while(|s| s.ratio > min_ratio)
        .inspect(|s| log::debug!("rank match candidate: {:.4} {:?}", s.ratio, s.record.title))
        .map(|s| s.record)
        .collect();

    if candidates.is_empty() {
        if let Some(closest) = scored.first() {
            log::debug!(
                "rank match no candidates, closest match: {:.4} {:?}",
                closest.ratio,
                closest.record.title
            );
        }
        return candidates;
    }

    log::debug!("rank match: total={} limit={}", candidates.len(), limit);
    candidates.into_iter().take(limit).collect()
}
