//! CLI entry point for the collage simulator

use clap::Parser;
use photodrift::io::cli::{Cli, CollageRunner};
use photodrift::io::logging;

fn main() -> photodrift::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet);
    CollageRunner::new(cli).run()?;
    Ok(())
}
