//! AVIF codec implementation
//!
//! Probes widths from the file header with `imagesize` and produces
//! derivatives with the `image` crate: decode, Lanczos3 fit-inside resize,
//! AVIF encode.

use crate::domain::repositories::{CodecError, EncodeRequest, ImageCodec};
use image::codecs::avif::AvifEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Encoder speed, 1 (slowest, smallest) to 10 (fastest)
pub const DEFAULT_ENCODER_SPEED: u8 = 6;

/// Local AVIF derivative writer
#[derive(Debug, Clone, Copy)]
pub struct AvifCodec {
    speed: u8,
}

impl Default for AvifCodec {
    fn default() -> Self {
        Self::new(DEFAULT_ENCODER_SPEED)
    }
}

impl AvifCodec {
    pub fn new(speed: u8) -> Self {
        Self {
            speed: speed.clamp(1, 10),
        }
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Scales `img` down to `target_width`, keeping the aspect ratio.
    /// Images already at or below the target are returned unchanged.
    fn fit_inside(img: DynamicImage, target_width: u32) -> DynamicImage {
        if img.width() <= target_width {
            return img;
        }
        img.resize(target_width, u32::MAX, FilterType::Lanczos3)
    }

    fn encode(&self, img: &DynamicImage, quality: u8) -> Result<Vec<u8>, CodecError> {
        // The AVIF encoder takes 8-bit RGB(A) only
        let img = if img.color().has_alpha() {
            DynamicImage::ImageRgba8(img.to_rgba8())
        } else {
            DynamicImage::ImageRgb8(img.to_rgb8())
        };

        let mut data = Vec::new();
        let encoder = AvifEncoder::new_with_speed_quality(&mut data, self.speed, quality);
        img.write_with_encoder(encoder)
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        Ok(data)
    }

    fn write_new(output: &Path, data: &[u8]) -> Result<(), CodecError> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(output) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(CodecError::OutputExists(output.display().to_string()));
            }
            Err(e) => return Err(CodecError::IoError(e)),
        };

        let written = file.write_all(data).and_then(|()| file.sync_all());
        if let Err(e) = written {
            drop(file);
            let _ = fs::remove_file(output);
            return Err(CodecError::IoError(e));
        }
        Ok(())
    }
}

impl ImageCodec for AvifCodec {
    fn probe_width(&self, source: &Path) -> Result<Option<u32>, CodecError> {
        let size = imagesize::size(source).map_err(|e| CodecError::Metadata(e.to_string()))?;
        Ok(u32::try_from(size.width).ok().filter(|w| *w > 0))
    }

    fn derive(&self, request: &EncodeRequest<'_>) -> Result<(), CodecError> {
        if request.output.exists() {
            return Err(CodecError::OutputExists(request.output.display().to_string()));
        }

        let img = ImageReader::open(request.source)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| CodecError::Decode(e.to_string()))?;

        let resized = Self::fit_inside(img, request.target_width);
        let data = self.encode(&resized, request.quality)?;
        Self::write_new(request.output, &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_inside_never_enlarges() {
        let img = DynamicImage::new_rgb8(40, 20);
        let out = AvifCodec::fit_inside(img, 100);
        assert_eq!((out.width(), out.height()), (40, 20));
    }

    #[test]
    fn fit_inside_keeps_aspect_ratio() {
        let img = DynamicImage::new_rgb8(400, 200);
        let out = AvifCodec::fit_inside(img, 100);
        assert_eq!((out.width(), out.height()), (100, 50));
    }

    #[test]
    fn speed_is_clamped() {
        assert_eq!(AvifCodec::new(0).speed(), 1);
        assert_eq!(AvifCodec::new(42).speed(), 10);
    }
}
