// crates/fcgrind-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;
mod render;

#[derive(Parser)]
#[command(name = "fcgrind")]
#[command(about = "Brute-force facility-code recovery for RFID credentials", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search card payloads for consistent FC/CN encodings
    Analyze(cmd::analyze::AnalyzeArgs),

    /// Inspect a format catalog file
    Catalog(cmd::catalog::CatalogArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Analyze(args) => cmd::analyze::run(args),
        Commands::Catalog(args) => cmd::catalog::run(args),
    }
}
