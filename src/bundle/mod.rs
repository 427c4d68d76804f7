//! The bundling pipeline.
//!
//! Transforms the three source assets into the servable minified page and
//! the generated header, in five steps evaluated in order:
//!
//! ```text
//! inline -> minify -> escape -> chunk -> emit
//! ```
//!
//! Every step is a deterministic, total transformation; identical source
//! assets always yield byte-identical outputs. Nothing touches the
//! filesystem until all transformation steps have succeeded.

pub mod chunk;
pub mod emit;
pub mod error;
pub mod escape;
pub mod inline;
pub mod minify;

pub use chunk::DEFAULT_CHUNK_SIZE;
pub use error::BundleError;

use crate::asset::SourceAssets;

/// Knobs for a build invocation, filled from CLI arguments.
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Minimum chunk length before splitting at a safe boundary.
    pub chunk_size: usize,
    /// Name of the generated string constant.
    pub constant: String,
    /// Header guard macro.
    pub guard: String,
    /// Whether to minify the bundled document.
    pub minify: bool,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            constant: "html_page".to_string(),
            guard: "NETWORK_HTTP_PAGE_H".to_string(),
            minify: true,
        }
    }
}

/// In-memory build outputs, ready to be written.
#[derive(Debug)]
pub struct BundleOutput {
    /// The minified servable page.
    pub minified: String,
    /// The rendered generated header.
    pub header: String,
    /// Number of chunks in the generated constant.
    pub chunk_count: usize,
}

/// Run the transformation steps of the pipeline (everything but emission).
pub fn bundle(assets: &SourceAssets, opts: &BundleOptions) -> Result<BundleOutput, BundleError> {
    let bundled = inline::inline_assets(&assets.markup, &assets.stylesheet, &assets.script)?;

    let minified = if opts.minify {
        minify::minify_document(&bundled)
    } else {
        bundled
    };

    let literal = escape::escape(&minified);
    let chunks = chunk::chunk(&literal, opts.chunk_size);
    let header = emit::render_header(&chunks, &opts.constant, &opts.guard);

    Ok(BundleOutput {
        minified,
        header,
        chunk_count: chunks.len(),
    })
}
