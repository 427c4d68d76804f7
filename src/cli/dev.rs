//! The `dev` command: generate a mocked-backend preview page.

use crate::asset::MARKUP_FILE;
use crate::cli::args::DevArgs;
use crate::{dev, log};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn run(args: &DevArgs) -> Result<()> {
    let markup_path = args.src.join(MARKUP_FILE);
    let markup = fs::read_to_string(&markup_path)
        .with_context(|| format!("failed to read `{}`", markup_path.display()))?;

    let out_file = resolve_out_file(args);
    let preview = dev::render_dev_page(&markup);
    fs::write(&out_file, preview)
        .with_context(|| format!("failed to write `{}`", out_file.display()))?;

    log!("dev"; "wrote {}", out_file.display());
    Ok(())
}

/// Default the preview page to `dev.html` next to the source directory, so
/// its relative `src/styles.css` and `src/app.js` references resolve.
fn resolve_out_file(args: &DevArgs) -> PathBuf {
    match &args.out_file {
        Some(path) => path.clone(),
        None => args
            .src
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join("dev.html"),
    }
}
