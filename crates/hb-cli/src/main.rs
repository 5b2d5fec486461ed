//! Console front-end for the Hollowbrook adventure game.

mod render;
mod repl;
mod verb;

use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hb",
    about = "Hollowbrook — a small text adventure",
    version
)]
struct Cli {
    /// Path of the save file
    #[arg(short, long, default_value = "hollowbrook-save.json")]
    save: PathBuf,

    /// RNG seed for deterministic play (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = repl::run(&cli.save, cli.seed) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (silent by default).
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
