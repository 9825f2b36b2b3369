//! Project manifest (sif.yaml) parsing.
//!
//! The manifest supplies image geometry and default file locations.
//! Every key is optional; command-line flags take precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SifError};

/// Default manifest filename.
pub const MANIFEST_FILENAME: &str = "sif.yaml";

/// Project manifest loaded from sif.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Layer width in pixels.
    pub width: usize,

    /// Layer height in pixels.
    pub height: usize,

    /// Digit file to decode.
    pub input: PathBuf,

    /// PNG written by `sif render`.
    pub output: PathBuf,

    /// Integer upscaling factor for PNG output.
    pub scale: u32,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            width: 25,
            height: 6,
            input: PathBuf::from("data.txt"),
            output: PathBuf::from("image.png"),
            scale: 1,
        }
    }
}

impl Manifest {
    /// Load manifest from a sif.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SifError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as null rather than a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest: Self = serde_yaml::from_str(content).map_err(|e| SifError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check sif.yaml syntax".to_string()),
        })?;

        if manifest.width == 0 || manifest.height == 0 {
            return Err(SifError::InvalidDimensions {
                width: manifest.width,
                height: manifest.height,
            });
        }

        Ok(manifest)
    }

    /// Resolve the manifest to use.
    ///
    /// An explicit path must exist. Otherwise `sif.yaml` in `dir` is
    /// loaded if present, falling back to defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = dir.join(MANIFEST_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
