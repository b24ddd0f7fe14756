mod naive;
mod tiled;
mod vec2d;

pub use naive::NaiveRenderer;
pub use tiled::TiledRenderer;
pub use vec2d::Vec2D;

use crate::camera::{CameraBasis, ViewSettings};
use crate::parsing::config::{RenderSettings, RendererType};
use crate::profile::Profile;
use crate::raster::Image;
use crate::shading::{Pixel, PixelFormat};
use crate::world::World;

use std::time::Instant;

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("invalid resolution {width}x{height}, both sides must be between 1 and 65535")]
    InvalidResolution { width: usize, height: usize },
}

pub trait Renderer {
    /// Fills every pixel of `film`. The result only depends on the pixel index, never on
    /// the order pixels are computed in.
    fn render_film(
        &self,
        world: &World,
        camera: &CameraBasis,
        format: PixelFormat,
        film: &mut Vec2D<Pixel>,
    ) -> Profile;
}

pub fn construct_renderer(kind: RendererType) -> Box<dyn Renderer> {
    match kind {
        RendererType::Naive => Box::new(NaiveRenderer::new()),
        RendererType::Tiled { tile_height } => Box::new(TiledRenderer::new(tile_height)),
    }
}

/// Renders `world` seen through `view` into an image ready to be serialized.
pub fn render(
    world: &World,
    view: &ViewSettings,
    settings: &RenderSettings,
) -> Result<Image, RenderError> {
    let (width, height) = (settings.resolution.width, settings.resolution.height);
    let (image_w, image_h) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => return Err(RenderError::InvalidResolution { width, height }),
    };
    info!(
        "starting render with film resolution {}x{} in {:?}",
        width, height, settings.pixel_format
    );

    let camera = CameraBasis::new(view, &world.bounding_box(), width, height);
    let renderer = construct_renderer(settings.renderer);

    let now = Instant::now();
    let mut film = Vec2D::new(width, height, Pixel::background(settings.pixel_format));
    let profile = renderer.render_film(world, &camera, settings.pixel_format, &mut film);
    let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;

    info!("took {}s", elapsed);
    profile.pretty_print(elapsed, rayon::current_num_threads());

    Ok(Image::from_pixels(
        image_w,
        image_h,
        settings.pixel_format,
        &film.buffer,
    ))
}
