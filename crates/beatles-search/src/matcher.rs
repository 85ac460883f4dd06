//! Combines strategies into a single ordered result list.

use beatles_core::{normalize, purge_annotations, Catalog, Record};

use crate::error::MatchResult;
use crate::rank::rank_match;
use crate::strategy::{parse_mode, Strategy};
use crate::substring::fuzzy_match;

pub const DEFAULT_LIMIT: usize = 1;
pub const DEFAULT_RATIO: f64 = 0.75;

/// Options shared by every strategy in one query.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOptions {
    /// Strategies to run, in order. Results are concatenated.
    pub strategies: Vec<Strategy>,

    /// Maximum results per strategy and for the combined list.
    pub limit: usize,

    /// Rank candidates must score strictly above this ratio.
    pub min_ratio: f64,

    /// Strip parenthesized annotations from the query first.
    pub purge: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            strategies: vec![Strategy::Rank],
            limit: DEFAULT_LIMIT,
            min_ratio: DEFAULT_RATIO,
            purge: false,
        }
    }
}

impl MatchOptions {
    #[must_use]
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_min_ratio(mut self, min_ratio: f64) -> Self {
        self.min_ratio = min_ratio;
        self
    }

    #[must_use]
    pub fn with_purge(mut self, purge: bool) -> Self {
        self.purge = purge;
        self
    }
}

/// Runs queries against a catalog with fixed options.
#[derive(Debug, Clone)]
pub struct Matcher<'a> {
    catalog: &'a Catalog,
    options: MatchOptions,
}

impl<'a> Matcher<'a> {
    pub fn new(catalog: &'a Catalog, options: MatchOptions) -> Self {
        Self { catalog, options }
    }

    /// The signature a raw query is matched by.
    pub fn signature(&self, query: &str) -> String {
        if self.options.purge {
            normalize(&purge_annotations(query))
        } else {
            normalize(query)
        }
    }

    pub fn run_strategy(&self, strategy: Strategy, signature: &str) -> Vec<&'a Record> {
        match strategy {
            Strategy::Rank => rank_match(
                self.catalog,
                signature,
                self.options.min_ratio,
                self.options.limit,
            ),
            Strategy::Fuzzy => fuzzy_match(self.catalog, signature, self.options.limit),
        }
    }

    /// Every strategy's results concatenated in strategy order, before the
    /// combined limit. A record found by two strategies appears twice.
    pub fn find_all(&self, query: &str) -> Vec<&'a Record> {
        let signature = self.signature(query);
        log::debug!("query={:?} sig={}", query, signature);

        let mut results = Vec::new();
        for &strategy in &self.options.strategies {
            let found = self.run_strategy(strategy, &signature);
            log::debug!("{} strategy: {} result(s)", strategy, found.len());
            results.extend(found);
        }
        results
    }

    /// Matching records, truncated to the configured limit.
    pub fn find(&self, query: &str) -> Vec<&'a Record> {
        let mut results = self.find_all(query);
        results.truncate(self.options.limit);
        results
    }
}

/// One-shot match with a comma-separated mode string such as `"rank,fuzzy"`.
///
/// The parsed mode replaces `options.strategies`. An unknown strategy name fails
/// the whole request before any matching runs.
pub fn match_query<'a>(
    catalog: &'a Catalog,
    query: &str,
    mode: &str,
    options: &MatchOptions,
) -> MatchResult<Vec<&'a Record>> {
    let strategies = parse_mode(mode)?;
    let options = options.clone().with_strategies(strategies);
    Ok(Matcher::new(catalog, options).find(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;

    fn titles(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn test_default_options() {
        let options = MatchOptions::default();
        assert_eq!(options.strategies, vec![Strategy::Rank]);
        assert_eq!(options.limit, 1);
        assert!((options.min_ratio - 0.75).abs() < f64::EPSILON);
        assert!(!options.purge);
    }

    #[test]
    fn test_signature_with_purge() {
        let catalog = Catalog::default();
        let query = "Norwegian Wood (This Bird Has Flown)";

        let plain = Matcher::new(&catalog, MatchOptions::default());
        assert_eq!(plain.signature(query), "norwegianwoodthisbirdhasflown");

        let purged = Matcher::new(&catalog, MatchOptions::default().with_purge(true));
        assert_eq!(purged.signature(query), normalize("Norwegian Wood "));
    }

    #[test]
    fn test_rank_only_misses_purged_query() {
        let catalog = Catalog::embedded().unwrap();
        let options = MatchOptions::default().with_purge(true).with_min_ratio(0.7);
        let found = match_query(&catalog, "Norwegian Wood (This Bird Has Flown)", "rank", &options)
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_rank_then_fuzzy_falls_through() {
        let catalog = Catalog::embedded().unwrap();
        let options = MatchOptions::default().with_purge(true).with_min_ratio(0.7);
        let found = match_query(
            &catalog,
            "Norwegian Wood (This Bird Has Flown)",
            "rank,fuzzy",
            &options,
        )
        .unwrap();
        assert_eq!(titles(&found), vec!["Norwegian Wood (This Bird Has Flown)"]);
    }

    #[test]
    fn test_combined_preserves_strategy_order_and_duplicates() {
        let catalog = Catalog::embedded().unwrap();
        let options = MatchOptions::default()
            .with_strategies(vec![Strategy::Rank, Strategy::Fuzzy])
            .with_limit(3);
        let matcher = Matcher::new(&catalog, options);

        let all = matcher.find_all("yesterday");
        assert_eq!(titles(&all), vec!["Yesterday", "Yesterday"]);

        let all = matcher.find_all("yes");
        let rank = matcher.run_strategy(Strategy::Rank, "yes");
        assert_eq!(&all[..rank.len()], rank.as_slice());
        assert_eq!(
            titles(&all[rank.len()..]),
            vec!["Yes It Is", "Yesterday", "Lonesome Tears in My Eyes"]
        );
    }

    #[test]
    fn test_combined_limit_applied_after_concatenation() {
        let catalog = Catalog::embedded().unwrap();
        let options = MatchOptions::default().with_limit(2);
        let found = match_query(&catalog, "yes", "fuzzy,fuzzy", &options).unwrap();
        assert_eq!(titles(&found), vec!["Yes It Is", "Yesterday"]);
    }

    #[test]
    fn test_unknown_strategy_is_an_error() {
        let catalog = Catalog::embedded().unwrap();
        let err = match_query(&catalog, "help", "rank,soundex", &MatchOptions::default())
            .unwrap_err();
        assert_eq!(err, MatchError::UnknownStrategy("soundex".to_string()));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = Catalog::embedded().unwrap();
        let found = match_query(&catalog, "zzzz qqqq", "rank,fuzzy", &MatchOptions::default())
            .unwrap();
        assert!(found.is_empty());
    }
}
