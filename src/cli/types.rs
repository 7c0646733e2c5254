use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "docpress")]
#[command(about = "Publish a directory of Markdown documents as static HTML pages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project root receiving sitemap.xml and robots.txt (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Documents directory, relative to the root (defaults to docs)
    #[arg(long, value_name = "DIR")]
    pub docs_dir: Option<PathBuf>,

    /// Absolute site URL; overrides SITE_BASE_URL
    #[arg(short, long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Build the docs pages, index, sitemap and robots file
    #[command(alias = "b")]
    Build {
        /// Only log errors
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },

    /// Remove generated pages, index, sitemap and robots file
    Clean {},
}
