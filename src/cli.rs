use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_SOURCE_IMAGE, GeneratorConfig};

#[derive(Debug, Parser)]
#[command(name = "macicons", version, about = "Generate macOS icon sizes from a source image.")]
pub struct Args {
    /// Path to the source image (must be 1024x1024).
    #[arg(value_name = "SOURCE_IMAGE", default_value = DEFAULT_SOURCE_IMAGE)]
    pub source_image: PathBuf,
}

impl Args {
    pub fn into_config(self) -> GeneratorConfig {
        GeneratorConfig::with_source(self.source_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parser_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_default_source() {
        let args = Args::try_parse_from(["macicons"]).unwrap();
        assert_eq!(args.source_image, PathBuf::from("icon.png"));
    }

    #[test]
    fn test_explicit_source() {
        let cfg = Args::try_parse_from(["macicons", "art/app.png"]).unwrap().into_config();
        assert_eq!(cfg.source, PathBuf::from("art/app.png"));
        assert_eq!(cfg.output_dir, PathBuf::from("mac_icons"));
    }

    #[test]
    fn test_rejects_extra_positional() {
        assert!(Args::try_parse_from(["macicons", "a.png", "b.png"]).is_err());
    }
}
