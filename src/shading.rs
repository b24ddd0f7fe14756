use crate::aabb::AABB;
use crate::camera::CameraBasis;
use crate::hittable::{Hit, Hittable};
use crate::math::Vec3;

use serde::{Deserialize, Serialize};

/// Sample encoding, chosen once for a whole image.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// one byte per sample, hit distance mapped linearly
    Gray,
    /// three bytes per sample, colored by the face normal of the hit
    #[default]
    Rgb,
}

impl PixelFormat {
    pub const fn bytes_per_sample(self) -> usize {
        match self {
            PixelFormat::Gray => 1,
            PixelFormat::Rgb => 3,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pixel {
    Gray(u8),
    Rgb([u8; 3]),
}

impl Pixel {
    pub const fn background(format: PixelFormat) -> Pixel {
        match format {
            PixelFormat::Gray => Pixel::Gray(0),
            PixelFormat::Rgb => Pixel::Rgb([0; 3]),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Pixel::Gray(value) => std::slice::from_ref(value),
            Pixel::Rgb(rgb) => rgb,
        }
    }
}

/// Distance covered by the full gray ramp.
pub const GRAY_RANGE: f32 = 4.0;

pub fn shade(hit: &Hit, format: PixelFormat) -> Pixel {
    if !hit.is_hit() {
        return Pixel::background(format);
    }
    match format {
        // float to int casts saturate, so distances past the range clamp to white
        PixelFormat::Gray => Pixel::Gray((hit.distance / GRAY_RANGE * 255.0) as u8),
        PixelFormat::Rgb => {
            let color = hit.axis.unit() * Vec3::splat(0.5) + Vec3::splat(0.5);
            Pixel::Rgb([
                (color.x * 255.0) as u8,
                (color.y * 255.0) as u8,
                (color.z * 255.0) as u8,
            ])
        }
    }
}

/// Closest hit along the camera ray of pixel `index`.
pub fn trace(index: usize, width: usize, height: usize, camera: &CameraBasis, scene: &[AABB]) -> Hit {
    let ray = camera.generate_ray(index, width, height);
    scene.hit(&ray)
}

/// Shades pixel `index` of a `width` x `height` image, row 0 being the bottom row.
pub fn render_pixel(
    index: usize,
    width: usize,
    height: usize,
    camera: &CameraBasis,
    scene: &[AABB],
    format: PixelFormat,
) -> Pixel {
    shade(&trace(index, width, height, camera, scene), format)
}
