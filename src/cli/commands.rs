//! CLI command definitions

use crate::domain::Environment;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogapi")]
#[command(about = "Build JSON:API collections from parsed blog posts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that reads content
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Manifest file or blog directory (default: from config, else ./blog)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Build environment; only "production" hides drafts
    #[arg(short, long, value_name = "ENV")]
    pub environment: Option<Environment>,

    /// Config file (default: ./blogapi.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build posts.json, tags.json and authors.json
    Build {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory (files land in <DIR>/api/blog)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// List tags with post counts
    Tags {
        #[command(flatten)]
        source: SourceArgs,
    },
}
