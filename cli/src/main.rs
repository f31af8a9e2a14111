use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use vivito_core::{Board, BoardSeeder, Coord2, RandomSeeder, Topology};

mod gui;
mod terminal;

/// Default board size when rendering to the terminal.
const TERMINAL_BOARD_SIZE: Coord2 = (10, 10);
/// Default board size when rendering to a window.
const GUI_BOARD_SIZE: Coord2 = (50, 50);
const DEFAULT_ALIVE_PERCENT: u8 = 33;

/// Conway's Game of Life on a clipped or toroidal board.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Edge behavior of the board
    #[arg(value_enum)]
    topology: TopologyArg,

    /// Where to render the simulation
    #[arg(short = 't', long, value_enum, default_value = "terminal")]
    frontend: Frontend,

    /// Probability in percent that a seeded cell starts alive
    #[arg(long, default_value_t = DEFAULT_ALIVE_PERCENT)]
    alive: u8,

    /// Seed for the starting arrangement, drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 1000)]
    interval: u64,

    #[command(flatten)]
    verbosity: Verbosity,
}

#[derive(clap::ValueEnum, Copy, Clone, Debug)]
enum TopologyArg {
    /// Toroidal board, edges wrap around to the opposite side
    Circular,
    /// Bounded board, positions beyond the edges do not exist
    Clipped,
}

impl From<TopologyArg> for Topology {
    fn from(arg: TopologyArg) -> Self {
        match arg {
            TopologyArg::Circular => Topology::Circular,
            TopologyArg::Clipped => Topology::Clipped,
        }
    }
}

#[derive(clap::ValueEnum, Copy, Clone, Debug, PartialEq)]
enum Frontend {
    Terminal,
    Gui,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    let (height, width) = match args.frontend {
        Frontend::Terminal => TERMINAL_BOARD_SIZE,
        Frontend::Gui => GUI_BOARD_SIZE,
    };
    let mut board = Board::new(height, width, args.topology.into())?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!(
        "{height}x{width} {:?} board, seed {seed}, {}% alive",
        board.topology(),
        args.alive
    );
    RandomSeeder::new(seed, args.alive).seed(&mut board)?;

    let interval = Duration::from_millis(args.interval);
    match args.frontend {
        Frontend::Terminal => terminal::run(board, interval),
        Frontend::Gui => gui::run(board, interval),
    }
}
