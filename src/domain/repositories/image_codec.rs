//! Image codec trait
//!
//! The deriver treats image handling as an opaque capability: read the
//! width of a source, and turn a source into a resized, re-encoded file.

use std::path::Path;
use thiserror::Error;

/// Errors surfaced by an image codec
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("{0}")]
    Metadata(String),

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("{0}")]
    Encode(String),

    #[error("output already exists: {0}")]
    OutputExists(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// One derivative to produce
#[derive(Debug, Clone, Copy)]
pub struct EncodeRequest<'a> {
    /// Source raster image
    pub source: &'a Path,
    /// Where the derivative is written; must not exist yet
    pub output: &'a Path,
    /// Width bound for the fit-inside resize
    pub target_width: u32,
    /// Encoder quality, 1-100
    pub quality: u8,
}

/// Trait for reading and re-encoding source images
///
/// # Example
///
/// ```ignore
/// let codec = AvifCodec::default();
/// if let Some(width) = codec.probe_width(Path::new("hero.jpg"))? {
///     codec.derive(&EncodeRequest { source, output, target_width: 960, quality: 67 })?;
/// }
/// ```
pub trait ImageCodec: Send + Sync {
    /// Reads the pixel width from the file header without decoding pixels.
    ///
    /// `Ok(None)` means the header was readable but carried no width.
    fn probe_width(&self, source: &Path) -> Result<Option<u32>, CodecError>;

    /// Resizes `source` to fit inside `target_width` without enlarging,
    /// encodes it at `quality`, and creates `output`.
    ///
    /// Never overwrites: an existing `output` is an error.
    fn derive(&self, request: &EncodeRequest<'_>) -> Result<(), CodecError>;

    /// Returns true if a derivative is already present at `output`
    fn output_exists(&self, output: &Path) -> bool {
        output.exists()
    }
}
