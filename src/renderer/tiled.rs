use super::{Renderer, Vec2D};

use crate::camera::CameraBasis;
use crate::profile::Profile;
use crate::shading::{shade, trace, Pixel, PixelFormat};
use crate::world::World;

use rayon::prelude::*;
use tracing::debug;

/// Splits the film into bands of `tile_height` full rows and hands each band to one rayon task.
#[derive(Copy, Clone, Debug)]
pub struct TiledRenderer {
    tile_height: usize,
}

impl TiledRenderer {
    pub fn new(tile_height: usize) -> TiledRenderer {
        TiledRenderer {
            tile_height: tile_height.max(1),
        }
    }
}

impl Default for TiledRenderer {
    fn default() -> Self {
        TiledRenderer::new(16)
    }
}

impl Renderer for TiledRenderer {
    fn render_film(
        &self,
        world: &World,
        camera: &CameraBasis,
        format: PixelFormat,
        film: &mut Vec2D<Pixel>,
    ) -> Profile {
        let (width, height) = (film.width, film.height);
        let scene = world.voxels();
        // a band never needs more rows than the film has
        let tile_height = self.tile_height.min(height.max(1));
        let tile_pixels = (width * tile_height).max(1);
        debug!(
            "rendering {} tiles of {} rows",
            height.div_ceil(tile_height),
            tile_height
        );
        film.buffer
            .par_chunks_mut(tile_pixels)
            .enumerate()
            .map(|(tile_index, tile)| {
                let mut profile = Profile::default();
                let first_pixel = tile_index * tile_pixels;
                for (offset, pixel_ref) in tile.iter_mut().enumerate() {
                    let hit = trace(first_pixel + offset, width, height, camera, scene);
                    *pixel_ref = shade(&hit, format);
                    profile = profile.combine(Profile::new(1, scene.len(), hit.is_hit() as usize));
                }
                profile
            })
            .reduce(Profile::default, |a, b| a.combine(b))
    }
}
