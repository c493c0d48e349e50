mod args;
mod cli;
#[cfg(feature = "tui")]
mod tui;

use args::Args;
use std::io;

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    cli::run(args)
}
