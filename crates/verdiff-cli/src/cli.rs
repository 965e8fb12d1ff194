use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "verdiff",
    about = "verdiff — structural comparison reports for code trees and documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two versions of a source tree
    Tree(TreeArgs),
    /// Compare two paginated text documents (form feed page breaks)
    Doc(DocArgs),
}

#[derive(Args)]
pub struct TreeArgs {
    /// Directory holding version 1
    pub version1: PathBuf,
    /// Directory holding version 2
    pub version2: PathBuf,
    /// Extension allowlist overriding the default source set
    #[arg(long, value_delimiter = ',')]
    pub extensions: Vec<String>,
    /// Show per-file change details in text output
    #[arg(long)]
    pub detailed: bool,
}

#[derive(Args)]
pub struct DocArgs {
    /// Text file holding document 1
    pub doc1: PathBuf,
    /// Text file holding document 2
    pub doc2: PathBuf,
}
