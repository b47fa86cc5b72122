use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use image::{DynamicImage, GenericImageView, ImageError, ImageFormat};

use crate::error::{IconError, Result};
use crate::logger::log_line;
use crate::sizes;

/// Render every entry of the size table from `source` into `output_dir`.
///
/// Checks, in order: the source is an existing file, the output directory
/// can be created, the source decodes, and its dimensions equal `expected`.
/// Any failure stops the run; files written before a failing write are kept.
/// Returns the written paths in size table order.
pub fn generate(source: &Path, output_dir: &Path, expected: (u32, u32)) -> Result<Vec<PathBuf>> {
    if !source.is_file() {
        return Err(IconError::NotFound(source.to_path_buf()));
    }

    fs::create_dir_all(output_dir).map_err(|e| IconError::CreateDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    // display only; an unresolvable path is shown as given
    let shown_dir = fs::canonicalize(output_dir).unwrap_or_else(|_| output_dir.to_path_buf());
    log_line(&format!("Output directory is set to: {}", shown_dir.display()));

    let img = open_source(source)?;
    let actual = img.dimensions();
    if actual != expected {
        return Err(IconError::SizeMismatch { expected, actual });
    }
    let source_name = source
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| source.display().to_string());
    log_line(&format!("Opened source image: {} with size {:?}", source_name, actual));

    let mut written = Vec::with_capacity(sizes::ICON_SIZES.len() * 2);
    for target in sizes::targets() {
        let (w, h) = target.dimensions();
        let resized = if (w, h) == actual {
            img.clone()
        } else {
            img.resize_exact(w, h, FilterType::Lanczos3)
        };
        let path = output_dir.join(target.file_name());
        // format is forced so the extension never decides the encoder
        resized
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| IconError::Write { path: path.clone(), source: e })?;
        log_line(&format!("Saved {}", target.file_name()));
        written.push(path);
    }

    log_line("All icons have been generated successfully.");
    Ok(written)
}

// Sniff the content so a mislabeled extension still decodes
fn open_source(path: &Path) -> Result<DynamicImage> {
    let decode_err = |source: ImageError| IconError::Decode { path: path.to_path_buf(), source };
    ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)
}
