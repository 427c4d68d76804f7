//! Bundling pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for a build invocation.
///
/// None of these are retried: a build either completes with a clean
/// generated header or aborts before anything is written.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("missing source asset `{0}`")]
    MissingAsset(PathBuf, #[source] std::io::Error),

    #[error("placeholder not found in markup: `{0}`")]
    PlaceholderNotFound(&'static str),

    #[error("ambiguous placeholder `{0}`: found {1} occurrences, expected exactly one")]
    AmbiguousPlaceholder(&'static str, usize),

    #[error("failed to write output `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}
