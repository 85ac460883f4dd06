use std::fmt;
use std::str::FromStr;

use crate::error::{MatchError, MatchResult};

/// A matching strategy selectable from a mode string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Exact lookup, then similarity ranking above a threshold.
    Rank,
    /// Prefix matches, then substring matches, each alphabetical.
    Fuzzy,
}

impl Strategy {
    pub const ALL: [Self; 2] = [Self::Rank, Self::Fuzzy];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rank => "rank",
            Self::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = MatchError;

    fn from_str(s: &str) -> MatchResult<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| MatchError::UnknownStrategy(name.to_string()))
    }
}

/// Parse a comma-separated mode string such as `"rank,fuzzy"`.
///
/// Order and repeats are kept as written. Every name must be known,
/// including the empty name produced by a stray comma.
pub fn parse_mode(mode: &str) -> MatchResult<Vec<Strategy>> {
    mode.split(',').map(str::parse).collect()
}

/// Render strategies back into mode-string form.
pub fn format_mode(strategies: &[Strategy]) -> String {
    strategies
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(",")
}
