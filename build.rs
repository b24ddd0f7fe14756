//! With the `baked` feature, renders the built in scene at build time so the binary can ship
//! the finished raster without tracing a single ray at runtime.
#![allow(dead_code)]

#[path = "src/aabb.rs"]
mod aabb;
#[path = "src/camera.rs"]
mod camera;
#[path = "src/hittable.rs"]
mod hittable;
#[path = "src/math/mod.rs"]
mod math;
#[path = "src/presets.rs"]
mod presets;
#[path = "src/ray.rs"]
mod ray;
#[path = "src/shading.rs"]
mod shading;

use std::env;
use std::fs;
use std::path::PathBuf;

use aabb::scene_bounding_box;
use camera::CameraBasis;
use shading::render_pixel;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src");
    if env::var_os("CARGO_FEATURE_BAKED").is_none() {
        return;
    }

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let (width, height) = (presets::WIDTH, presets::HEIGHT);
    let format = presets::PIXEL_FORMAT;
    let scene = presets::VOXELS;
    let camera = CameraBasis::new(&presets::VIEW, &scene_bounding_box(&scene), width, height);

    let mut bytes = Vec::with_capacity(4 + width * height * format.bytes_per_sample());
    bytes.extend_from_slice(&(width as u16).to_le_bytes());
    bytes.extend_from_slice(&(height as u16).to_le_bytes());
    for index in 0..width * height {
        let pixel = render_pixel(index, width, height, &camera, &scene, format);
        bytes.extend_from_slice(pixel.as_bytes());
    }

    fs::write(out_dir.join("baked_image.bin"), bytes).expect("failed to write baked image");
}
