pub mod checksum;
pub mod completions;
pub mod render;
pub mod view;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::parser::read_image;
use crate::types::Image;

/// sif - Space image format decoder
#[derive(Parser, Debug)]
#[command(name = "sif")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the checksum of an image file
    Checksum(checksum::ChecksumArgs),

    /// Flatten an image file and write it as PNG
    Render(render::RenderArgs),

    /// Preview a PNG as black, white and transparent pixels
    View(view::ViewArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by commands that decode an image file
#[derive(Args, Debug, Default)]
pub struct ImageArgs {
    /// Digit file to decode (default: manifest input, then data.txt)
    pub input: Option<PathBuf>,

    /// Layer width in pixels
    #[arg(long)]
    pub width: Option<usize>,

    /// Layer height in pixels
    #[arg(long)]
    pub height: Option<usize>,

    /// Manifest to load instead of ./sif.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ImageArgs {
    /// Load the manifest and apply command-line overrides.
    pub fn manifest(&self) -> Result<Manifest> {
        let mut manifest = Manifest::resolve(self.config.as_deref(), Path::new("."))?;

        if let Some(input) = &self.input {
            manifest.input = input.clone();
        }
        if let Some(width) = self.width {
            manifest.width = width;
        }
        if let Some(height) = self.height {
            manifest.height = height;
        }

        Ok(manifest)
    }
}

/// Read and decode the manifest's input file.
pub(crate) fn load_image(manifest: &Manifest, printer: &Printer) -> Result<Image> {
    let image = read_image(&manifest.input, manifest.width, manifest.height)?;

    printer.status(
        "Decoded",
        &format!(
            "{} ({}x{}) from {}",
            plural(image.layer_count(), "layer", "layers"),
            image.width(),
            image.height(),
            printer.cyan(&display_path(&manifest.input)),
        ),
    );

    Ok(image)
}
