//! Repository traits (interfaces)
//!
//! Contracts for the external collaborators of the domain. Concrete
//! implementations live in the infrastructure layer; tests substitute fakes.

mod image_codec;

pub use image_codec::{CodecError, EncodeRequest, ImageCodec};
