use anyhow::{Context, Result};

/// Route `log` records to stderr so result lines on stdout stay clean.
///
/// Diagnostics from the matcher are emitted at `debug` level and only
/// shown when `debug` is set; otherwise only warnings and errors appear.
pub fn init(debug: bool) -> Result<()> {
    let level = if debug {
        twyg::LogLevel::Debug
    } else {
        twyg::LogLevel::Warn
    };

    let opts = twyg::OptsBuilder::new()
        .coloured(false)
        .output(twyg::Output::Stderr)
        .level(level)
        .report_caller(false)
        .build()
        .context("Failed to build logger options")?;

    twyg::setup(opts).context("Failed to initialize logger")?;
    Ok(())
}
