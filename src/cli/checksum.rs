//! Checksum command implementation.
//!
//! Decodes an image file and prints its checksum to stdout.

use clap::Args;

use crate::analysis::{checksum, checksum_raw, Checksum};
use crate::error::{Result, SifError};
use crate::output::{plural, Printer};

use super::{load_image, ImageArgs};

/// Print the checksum of an image file
#[derive(Args, Debug)]
pub struct ChecksumArgs {
    #[command(flatten)]
    pub image: ImageArgs,

    /// Emit the selected layer and its counts as JSON
    #[arg(long)]
    pub json: bool,

    /// Count raw digits, ignoring values other than 0, 1 and 2
    #[arg(long)]
    pub raw: bool,
}

pub fn run(args: ChecksumArgs, printer: &Printer) -> Result<()> {
    let manifest = args.image.manifest()?;
    let image = load_image(&manifest, printer)?;

    let sum = if args.raw {
        checksum_raw(&image)?
    } else {
        checksum(&image)?
    };
    report_selection(&sum, printer);

    if args.json {
        println!("{}", to_json(&sum)?);
    } else {
        println!("{}", sum.value);
    }

    Ok(())
}

pub(crate) fn report_selection(sum: &Checksum, printer: &Printer) {
    printer.info(
        "Selected",
        &format!(
            "layer {} with {}",
            sum.layer,
            plural(sum.counts.black, "zero", "zeros")
        ),
    );
}

fn to_json(sum: &Checksum) -> Result<String> {
    serde_json::to_string_pretty(sum).map_err(|e| SifError::Encode {
        message: format!("Failed to encode checksum as JSON: {}", e),
    })
}
