//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Pagegen web asset bundler CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Bundle the source assets into the servable page and generated header
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Generate a mocked-backend preview page for local development
    #[command(visible_alias = "d")]
    Dev {
        #[command(flatten)]
        args: DevArgs,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Source asset directory (must contain index.html, styles.css, app.js)
    #[arg(short, long, default_value = "src", value_hint = clap::ValueHint::DirPath)]
    pub src: PathBuf,

    /// Output directory for the minified page and generated header
    #[arg(short, long, default_value = "dist", value_hint = clap::ValueHint::DirPath)]
    pub out: PathBuf,

    /// Minimum chunk length before splitting at a safe boundary
    #[arg(long, default_value_t = 100)]
    pub chunk_size: usize,

    /// Name of the generated string constant
    #[arg(long, default_value = "html_page")]
    pub constant: String,

    /// Header guard macro for the generated file
    #[arg(long, default_value = "NETWORK_HTTP_PAGE_H")]
    pub guard: String,

    /// Minify the bundled page
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", default_value_t = true, require_equals = false)]
    pub minify: bool,
}

/// Dev command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct DevArgs {
    /// Source asset directory (only index.html is read)
    #[arg(short, long, default_value = "src", value_hint = clap::ValueHint::DirPath)]
    pub src: PathBuf,

    /// Output file for the preview page (default: dev.html next to the
    /// source directory)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub out_file: Option<PathBuf>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_dev(&self) -> bool {
        matches!(self.command, Commands::Dev { .. })
    }
}
