//! Render command implementation.
//!
//! Prints the checksum, flattens the layers and writes the visible image
//! as PNG.

use std::path::PathBuf;

use clap::Args;

use crate::analysis::checksum;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::{flatten, render_text, write_png};

use super::checksum::report_selection;
use super::{load_image, ImageArgs};

/// Flatten an image file and write it as PNG
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub image: ImageArgs,

    /// Output PNG path (default: manifest output, then image.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Scale factor for output (integer upscaling)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Also print the flattened image to stdout
    #[arg(long)]
    pub text: bool,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let manifest = args.image.manifest()?;
    let output = args.output.unwrap_or(manifest.output.clone());
    let scale = args.scale.unwrap_or(manifest.scale);

    let image = load_image(&manifest, printer)?;

    let sum = checksum(&image)?;
    report_selection(&sum, printer);
    println!("{}", sum.value);

    let flat = flatten(&image)?;
    let (width, height) = write_png(&flat, &output, scale)?;

    printer.status(
        "Wrote",
        &format!(
            "{} ({}x{})",
            printer.cyan(&display_path(&output)),
            width,
            height,
        ),
    );

    if args.text {
        print!("{}", render_text(&flat));
    }

    Ok(())
}
