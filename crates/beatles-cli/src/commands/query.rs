use anyhow::Result;
use beatles_core::Catalog;
use beatles_search::Matcher;
use std::io::Write;

use crate::config::Config;

/// Match `query` and print one formatted line per result.
///
/// Returns the number of records printed. Zero is a valid outcome; the
/// caller turns it into a non-zero exit status.
pub fn run_query<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    config: &Config,
    query: &str,
) -> Result<usize> {
    let matcher = Matcher::new(catalog, config.match_options());
    let matched = matcher.find(query);

    if matched.is_empty() {
        log::debug!("No match for {:?}", query);
        return Ok(0);
    }

    for record in &matched {
        writeln!(out, "{}", config.fmt.render(record))?;
    }
    Ok(matched.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn config(pairs: &[(&str, &str)]) -> Config {
        Config::from_settings(Settings::from_env_vars(pairs.iter().copied()).unwrap()).unwrap()
    }

    fn run(config: &Config, query: &str) -> (usize, String) {
        let catalog = Catalog::embedded().unwrap();
        let mut out = Vec::new();
        let count = run_query(&mut out, &catalog, config, query).unwrap();
        (count, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_query_default_template() {
        let (count, text) = run(&Config::default(), "yesterday");
        assert_eq!(count, 1);
        assert_eq!(text, "Yesterday - McCartney, 1965\n");
    }

    #[test]
    fn test_query_rank_with_ratio() {
        let config = config(&[
            ("BS_MATCH_MODE", "rank"),
            ("BS_MATCH_RATIO", "0.8"),
            ("BS_FMT", "{title}|{vocals}|{year}"),
        ]);
        let (_, text) = run(&config, "eight days a wee");
        assert_eq!(text, "Eight Days a Week|Lennon, with McCartney|1964\n");
    }

    #[test]
    fn test_query_no_match_prints_nothing() {
        let config = config(&[("BS_MATCH_RATIO", "1")]);
        let (count, text) = run(&config, "eight days a wee");
        assert_eq!(count, 0);
        assert!(text.is_empty());
    }

    #[test]
    fn test_query_fuzzy_lines() {
        let config = config(&[
            ("BS_MATCH_MODE", "fuzzy"),
            ("BS_MATCH_LIMIT", "3"),
            ("BS_FMT", "{title}/{vocals}"),
        ]);
        let (count, text) = run(&config, "yes");
        assert_eq!(count, 3);
        assert_eq!(
            text,
            "Yes It Is/Lennon, McCartney and Harrison\nYesterday/McCartney\nLonesome Tears in My Eyes/Lennon\n"
        );
    }
}
