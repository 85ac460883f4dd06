//! Matching engine for beatles-song.
//!
//! Turns a free-text query into a signature and finds catalog records with
//! one or more strategies:
//!
//! - `rank`: exact signature lookup, else Ratcliff/Obershelp similarity
//!   ranking above a minimum ratio ([`rank`]).
//! - `fuzzy`: prefix then substring containment, alphabetical within each
//!   group ([`substring`]).
//!
//! [`Matcher`] runs the configured strategies in order and applies the
//! result limit; [`Template`] renders matched records for output.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod matcher;
pub mod rank;
pub mod similarity;
pub mod strategy;
pub mod substring;
pub mod template;

pub use error::{MatchError, MatchResult, TemplateError};
pub use matcher::{match_query, MatchOptions, Matcher, DEFAULT_LIMIT, DEFAULT_RATIO};
pub use rank::rank_match;
pub use similarity::ratio;
pub use strategy::{format_mode, parse_mode, Strategy};
pub use substring::fuzzy_match;
pub use template::{Field, Template, DEFAULT_TEMPLATE};
