//! The `build` command: run the full bundling pipeline.

use crate::asset::SourceAssets;
use crate::bundle::{self, BundleOptions, emit};
use crate::cli::args::BuildArgs;
use crate::{debug, log};
use anyhow::{Context, Result};

pub fn run(args: &BuildArgs) -> Result<()> {
    let assets = SourceAssets::load(&args.src)
        .with_context(|| format!("asset loading failed in `{}`", args.src.display()))?;
    debug!("build"; "loaded assets from {}", args.src.display());

    let opts = BundleOptions {
        chunk_size: args.chunk_size,
        constant: args.constant.clone(),
        guard: args.guard.clone(),
        minify: args.minify,
    };
    let output = bundle::bundle(&assets, &opts).context("bundling failed")?;
    debug!("build"; "escaped literal split into {} chunks", output.chunk_count);

    let (page_path, header_path) = emit::write_outputs(&args.out, &output.minified, &output.header)
        .context("emission failed")?;

    log!("build"; "minified page: {} bytes", output.minified.len());
    log!("build"; "wrote {}", page_path.display());
    log!("build"; "wrote {}", header_path.display());
    Ok(())
}
