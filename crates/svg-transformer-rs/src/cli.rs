//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::Parser;

/// SVG icon library generator with lazy-loading runtime modules.
#[derive(Debug, Parser)]
#[command(name = "svg-transformer-rs")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: Utf8PathBuf,

    /// Path to the configuration file (default: svg-transformer.config.json)
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,

    /// Directory containing the SVG source files
    #[arg(long = "svg-dir")]
    pub svg_dir: Option<Utf8PathBuf>,

    /// Directory the per-icon cache modules are written to
    #[arg(long = "cache-dir")]
    pub cache_dir: Option<Utf8PathBuf>,

    /// Directory the library module is written to
    #[arg(long = "library-dir")]
    pub library_dir: Option<Utf8PathBuf>,

    /// Emit plain JavaScript instead of TypeScript
    #[arg(long)]
    pub js: bool,

    /// Generate into Nuxt's .nuxt directory
    #[arg(long)]
    pub nuxt: bool,

    /// Skip writing the icons.d.ts declaration stub
    #[arg(long = "no-definitions")]
    pub no_definitions: bool,

    /// Skip .gitignore maintenance
    #[arg(long = "no-gitignore")]
    pub no_gitignore: bool,

    /// Watch the SVG directory and regenerate on change
    #[arg(long)]
    pub watch: bool,

    /// Suppress the summary line
    #[arg(long)]
    pub quiet: bool,
}
