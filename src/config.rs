use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::generator;

pub const DEFAULT_SOURCE_IMAGE: &str = "icon.png";
pub const OUTPUT_DIR_NAME: &str = "mac_icons";
pub const EXPECTED_SIZE: (u32, u32) = (1024, 1024);

/// Inputs of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub expected_size: (u32, u32),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE_IMAGE),
            output_dir: PathBuf::from(OUTPUT_DIR_NAME),
            expected_size: EXPECTED_SIZE,
        }
    }
}

impl GeneratorConfig {
    pub fn with_source(source: impl AsRef<Path>) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn run(&self) -> Result<Vec<PathBuf>> {
        generator::generate(&self.source, &self.output_dir, self.expected_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.source, PathBuf::from("icon.png"));
        assert_eq!(cfg.output_dir, PathBuf::from("mac_icons"));
        assert_eq!(cfg.expected_size, (1024, 1024));
    }

    #[test]
    fn test_with_source_keeps_other_defaults() {
        let cfg = GeneratorConfig::with_source("art/logo.png");
        assert_eq!(cfg.source, PathBuf::from("art/logo.png"));
        assert_eq!(cfg.output_dir, PathBuf::from(OUTPUT_DIR_NAME));
        assert_eq!(cfg.expected_size, EXPECTED_SIZE);
    }
}
