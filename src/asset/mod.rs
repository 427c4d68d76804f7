//! Source asset loading.
//!
//! The bundler consumes exactly three fixed-name files from the source
//! directory: the page markup, its stylesheet, and its client script.

pub mod minify;

use crate::bundle::BundleError;
use std::fs;
use std::path::Path;

/// Markup file name expected under the source directory.
pub const MARKUP_FILE: &str = "index.html";
/// Stylesheet file name expected under the source directory.
pub const STYLESHEET_FILE: &str = "styles.css";
/// Script file name expected under the source directory.
pub const SCRIPT_FILE: &str = "app.js";

/// The three raw text assets a build starts from.
#[derive(Debug, Clone)]
pub struct SourceAssets {
    pub markup: String,
    pub stylesheet: String,
    pub script: String,
}

impl SourceAssets {
    /// Read all three assets from `src_dir`.
    ///
    /// Re-reads from disk on every call so the pipeline always reflects the
    /// latest edits. Content is treated as UTF-8 text, no transformation.
    pub fn load(src_dir: &Path) -> Result<Self, BundleError> {
        Ok(Self {
            markup: read_asset(src_dir, MARKUP_FILE)?,
            stylesheet: read_asset(src_dir, STYLESHEET_FILE)?,
            script: read_asset(src_dir, SCRIPT_FILE)?,
        })
    }
}

fn read_asset(dir: &Path, name: &str) -> Result<String, BundleError> {
    let path = dir.join(name);
    fs::read_to_string(&path).map_err(|e| BundleError::MissingAsset(path, e))
}
