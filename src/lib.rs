pub mod aabb;
#[cfg(feature = "baked")]
pub mod baked;
pub mod camera;
pub mod hittable;
pub mod logging;
pub mod math;
pub mod parsing;
pub mod prelude;
pub mod presets;
pub mod profile;
pub mod raster;
pub mod ray;
pub mod renderer;
pub mod shading;
pub mod world;
