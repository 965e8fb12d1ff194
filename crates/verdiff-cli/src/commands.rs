//! Command dispatch: each subcommand reads its inputs, runs the engine, and
//! renders the stored report.

use colored::Colorize;
use tracing::Level;

use verdiff_sdk::Engine;
use verdiff_store::StoredReport;

use crate::cli::{Cli, Command, DocArgs, OutputFormat, TreeArgs};
use crate::{intake, render};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.verbose);
    match cli.command {
        Command::Tree(args) => cmd_tree(&args, &cli.format),
        Command::Doc(args) => cmd_doc(&args, &cli.format),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn cmd_tree(args: &TreeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let extensions = resolve_extensions(&args.extensions);
    let old = intake::read_tree(&args.version1, &extensions)?;
    let new = intake::read_tree(&args.version2, &extensions)?;

    let engine = Engine::in_memory();
    let (id, report) = engine.compare_tree(Some(&old), Some(&new))?;

    match format {
        OutputFormat::Json => {
            println!("{}", render::to_json(&id, &StoredReport::Software(report))?);
        }
        OutputFormat::Text => {
            println!("{} {}\n", "Report".bold(), id);
            print!("{}", render::tree_summary(&report, args.detailed));
        }
    }
    Ok(())
}

fn cmd_doc(args: &DocArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let doc1 = intake::read_pages(&args.doc1)?;
    let doc2 = intake::read_pages(&args.doc2)?;

    let engine = Engine::in_memory();
    let (id, report) = engine.compare_pdf_bytes(Some(&doc1), Some(&doc2))?;

    match format {
        OutputFormat::Json => {
            println!("{}", render::to_json(&id, &StoredReport::Pdf(report))?);
        }
        OutputFormat::Text => {
            println!("{} {}\n", "Report".bold(), id);
            print!("{}", render::doc_summary(&report));
        }
    }
    Ok(())
}

fn resolve_extensions(overrides: &[String]) -> Vec<String> {
    if overrides.is_empty() {
        intake::DEFAULT_EXTENSIONS
            .iter()
            .map(|ext| (*ext).to_string())
            .collect()
    } else {
        overrides.to_vec()
    }
}
