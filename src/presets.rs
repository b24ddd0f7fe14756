//! Scene and camera baked into the renderer.

use std::f32::consts::{FRAC_PI_4, FRAC_PI_8};

use crate::aabb::AABB;
use crate::camera::ViewSettings;
use crate::math::Vec3;
use crate::shading::PixelFormat;

pub const VOXELS: [AABB; 2] = [
    AABB::new(Vec3::splat(-0.75), Vec3::splat(0.25)),
    AABB::new(Vec3::splat(-0.25), Vec3::splat(0.75)),
];

pub const VIEW: ViewSettings = ViewSettings {
    roll: FRAC_PI_8,
    azimuth: FRAC_PI_4,
    declination: 0.0,
    eye: Vec3::new(0.0, 0.0, 2.125),
};

pub const WIDTH: usize = 256;
pub const HEIGHT: usize = 256;
pub const PIXEL_FORMAT: PixelFormat = PixelFormat::Rgb;
