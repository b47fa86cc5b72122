use std::io;
use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IconError>;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Source image not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Source image size mismatch: expected {expected:?}, got {actual:?}")]
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Unreadable source image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// Coarse classification used by callers that only care about the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    SizeMismatch,
    Decode,
    Filesystem,
}

impl IconError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IconError::NotFound(_) => ErrorKind::NotFound,
            IconError::SizeMismatch { .. } => ErrorKind::SizeMismatch,
            IconError::Decode { .. } => ErrorKind::Decode,
            IconError::CreateDir { .. } | IconError::Write { .. } => ErrorKind::Filesystem,
        }
    }
}
