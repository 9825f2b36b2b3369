use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::{read_png, render_text};

/// Preview a PNG as black, white and transparent pixels
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Image file to preview
    #[arg(required = true)]
    pub file: PathBuf,
}

pub fn run(args: ViewArgs, printer: &Printer) -> Result<()> {
    let layer = read_png(&args.file)?;

    printer.status(
        "Read",
        &format!(
            "{} ({}x{})",
            printer.cyan(&display_path(&args.file)),
            layer.width(),
            layer.height()
        ),
    );

    print!("{}", render_text(&layer));

    Ok(())
}
