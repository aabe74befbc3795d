//! CLI entry point for the quadrant recombination generator

use clap::Parser;
use quadtile::io::cli::{Cli, CompositionRunner};

fn main() -> quadtile::Result<()> {
    let cli = Cli::parse();
    let runner = CompositionRunner::new(cli);
    runner.run()
}
