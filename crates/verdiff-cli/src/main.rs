use clap::Parser;

mod cli;
mod commands;
mod intake;
mod render;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    commands::run_command(cli)
}
