//! Generated artifact emission.
//!
//! Renders the header-guarded C declaration and writes both build outputs.
//! Rendering is pure; the file writes are the pipeline's only side effects
//! and happen after every transformation step has already succeeded.

use super::BundleError;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the minified servable page under the output directory.
pub const PAGE_FILE: &str = "index.html";
/// File name of the generated header under the output directory.
pub const HEADER_FILE: &str = "network-http-page.h";

/// Render the generated header: a guarded declaration of one constant built
/// from the chunks by string-literal adjacency, one chunk per line.
pub fn render_header(chunks: &[String], constant: &str, guard: &str) -> String {
    let body = chunks
        .iter()
        .map(|chunk| format!("    \"{chunk}\""))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "// Auto-generated file - do not edit manually\n\
         // Generated from frontend sources\n\
         \n\
         #ifndef {guard}\n\
         #define {guard}\n\
         \n\
         static const char *{constant} = \n\
         {body};\n\
         \n\
         #endif // {guard}\n"
    )
}

/// Write the minified page and generated header under `out_dir`.
///
/// Both writes are full overwrites. Returns the two paths written, page
/// first.
pub fn write_outputs(
    out_dir: &Path,
    minified: &str,
    header: &str,
) -> Result<(PathBuf, PathBuf), BundleError> {
    fs::create_dir_all(out_dir).map_err(|e| BundleError::Write(out_dir.to_path_buf(), e))?;

    let page_path = out_dir.join(PAGE_FILE);
    fs::write(&page_path, minified).map_err(|e| BundleError::Write(page_path.clone(), e))?;

    let header_path = out_dir.join(HEADER_FILE);
    fs::write(&header_path, header).map_err(|e| BundleError::Write(header_path.clone(), e))?;

    Ok((page_path, header_path))
}
