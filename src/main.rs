use clap::Parser;
use miette::Result;
use sif::cli::{Cli, Commands};
use sif::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Checksum(args) => sif::cli::checksum::run(args, &printer)?,
        Commands::Render(args) => sif::cli::render::run(args, &printer)?,
        Commands::View(args) => sif::cli::view::run(args, &printer)?,
        Commands::Completions(args) => sif::cli::completions::run(args)?,
    }

    Ok(())
}
