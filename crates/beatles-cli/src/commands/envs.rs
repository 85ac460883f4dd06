use anyhow::Result;
use std::io::Write;

use crate::config::{Config, ENV_PREFIX};

/// Print every recognized option with its effective value.
pub fn show_envs<W: Write>(out: &mut W, config: &Config) -> Result<()> {
    writeln!(out, "Env vars and current value")?;
    for (name, value) in config.entries() {
        writeln!(out, "  {}{}\t{}", ENV_PREFIX, name, value)?;
    }
    Ok(())
}
