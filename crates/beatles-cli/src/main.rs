use anyhow::{Context, Result};
use beatles_core::Catalog;
use beatles_search::format_mode;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;
mod logging;

use config::{Config, Settings};

/// Exit status for a missing query argument.
const EXIT_USAGE: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "bts", version, about)]
struct Cli {
    /// Song title to look up (punctuation and case are ignored)
    ///
    /// The query is reduced to its letters and matched against every song
    /// title with the configured strategies:
    ///
    /// - rank: exact title first, else the closest titles whose similarity
    ///   ratio is above --ratio
    /// - fuzzy: titles starting with the query, then titles containing it,
    ///   each group alphabetical
    ///
    /// Exits with status 1 when nothing matches.
    query: Option<String>,

    /// Path to the config file (default: ~/.config/beatles-song/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print matcher diagnostics to stderr [env: BS_DEBUG]
    #[arg(long)]
    debug: bool,

    /// Remove "(...)" annotations from the query first [env: BS_PURGE_QUERY]
    #[arg(long)]
    purge: bool,

    /// Comma-separated strategies, e.g. "rank,fuzzy" [env: BS_MATCH_MODE]
    #[arg(long, value_name = "STRATEGIES")]
    mode: Option<String>,

    /// Maximum number of results [env: BS_MATCH_LIMIT]
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Minimum similarity for rank matches, 0 to 1 [env: BS_MATCH_RATIO]
    #[arg(long, value_name = "RATIO", allow_negative_numbers = true)]
    ratio: Option<f64>,

    /// Output template, e.g. "{title} ({year})" [env: BS_FMT]
    ///
    /// Placeholders: title, contributors (songwriters), group (album),
    /// vocals, year, notes. Use {{ and }} for literal braces.
    #[arg(long = "format", value_name = "TEMPLATE")]
    fmt: Option<String>,

    /// Print every song and exit [env: BS_LIST_ALL]
    #[arg(long)]
    list_all: bool,

    /// Print recognized options with their current values and exit [env: BS_SHOW_ENVS]
    #[arg(long)]
    show_envs: bool,
}

impl Cli {
    /// Command-line overrides as the top configuration layer.
    fn settings(&self) -> Settings {
        let flag = |set: bool| set.then_some(true);
        Settings {
            debug: flag(self.debug),
            purge_query: flag(self.purge),
            match_mode: self.mode.clone(),
            match_limit: self.limit,
            match_ratio: self.ratio,
            fmt: self.fmt.clone(),
            list_all: flag(self.list_all),
            show_envs: flag(self.show_envs),
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref(), cli.settings())?;
    logging::init(config.debug)?;

    for name in &config.ignored_env {
        log::warn!("Ignoring unrecognized variable {}", name);
    }
    log::debug!(
        "global vars: MATCH_MODE={} MATCH_RATIO={} MATCH_LIMIT={} FMT={}",
        format_mode(&config.strategies),
        config.match_ratio,
        config.match_limit,
        config.fmt
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if config.show_envs {
        commands::show_envs(&mut out, &config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let catalog = Catalog::embedded().context("Failed to load song catalog")?;

    if config.list_all {
        commands::list_all(&mut out, &catalog, &config.fmt)?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(query) = cli.query.as_deref() else {
        eprintln!("Usage: bts <query>");
        return Ok(ExitCode::from(EXIT_USAGE));
    };

    let printed = commands::run_query(&mut out, &catalog, &config, query)?;
    out.flush()?;

    if printed == 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("bts: {e:#}");
            ExitCode::FAILURE
        }
    }
}
