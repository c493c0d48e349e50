//! Running without the TUI.

use crate::args::Args;
use gridca_lib::Simulation;
use log::info;
use std::io::{self, Write};

/// Runs the automaton for the given number of generations,
/// and writes the last generation.
pub(crate) fn run_without_tui<W: Write>(
    world: &mut dyn Simulation,
    generations: u64,
    out: &mut W,
) -> io::Result<()> {
    for _ in 0..generations {
        world.step();
    }
    info!("ran {} generations", world.generation());
    out.write_all(world.plaintext().as_bytes())?;
    out.flush()
}

/// Runs with or without the TUI, as the arguments say.
pub(crate) fn run(args: Args) -> io::Result<()> {
    let Args {
        config,
        mut world,
        generations,
        #[cfg(feature = "tui")]
        no_tui,
    } = args;

    #[cfg(feature = "tui")]
    if !no_tui {
        return crate::tui::run_with_tui(world, &config);
    }

    #[cfg(not(feature = "tui"))]
    let _ = config;

    let stdout = io::stdout();
    run_without_tui(world.as_mut(), generations, &mut stdout.lock())
}
