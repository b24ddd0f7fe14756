pub use crate::aabb::{scene_bounding_box, HasBoundingBox, AABB};
pub use crate::camera::{CameraBasis, ViewSettings};
pub use crate::hittable::{Axis, Hit, Hittable};
pub use crate::math::{Matrix4x4, Vec3, Vec4};
pub use crate::parsing::config::{Config, RenderSettings, RendererType, Resolution};
pub use crate::raster::{Image, RasterError};
pub use crate::ray::Ray;
pub use crate::renderer::{render, NaiveRenderer, RenderError, Renderer, TiledRenderer, Vec2D};
pub use crate::shading::{render_pixel, Pixel, PixelFormat};
pub use crate::world::{SceneError, World};
