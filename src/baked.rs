//! Raw image of the built in scene, rendered by the build script.

use crate::presets;
use crate::raster::{Image, RasterError};

pub static IMAGE_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/baked_image.bin"));

pub fn image() -> Result<Image, RasterError> {
    Image::decode(IMAGE_BYTES, Some(presets::PIXEL_FORMAT))
}
