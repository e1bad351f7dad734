//! Image codec implementations

mod avif_codec;

pub use avif_codec::{AvifCodec, DEFAULT_ENCODER_SPEED};
