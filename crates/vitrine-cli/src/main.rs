mod cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "vitrine",
    version,
    about = "Vitrine - serve theme variants of a static site on side-by-side ports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve every theme variant on its own port
    Serve {
        /// Website directory (defaults to the current directory)
        root: Option<PathBuf>,
    },
    /// Validate the website directory before a demo
    Check {
        /// Website directory (defaults to the current directory)
        root: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { root } => cmd::serve::run(root).await,
        Commands::Check { root } => cmd::check::run(root),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
