use super::{Renderer, Vec2D};

use crate::camera::CameraBasis;
use crate::profile::Profile;
use crate::shading::{shade, trace, Pixel, PixelFormat};
use crate::world::World;

use rayon::prelude::*;

/// One rayon task per pixel.
#[derive(Default, Copy, Clone, Debug)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }
}

impl Renderer for NaiveRenderer {
    fn render_film(
        &self,
        world: &World,
        camera: &CameraBasis,
        format: PixelFormat,
        film: &mut Vec2D<Pixel>,
    ) -> Profile {
        let (width, height) = (film.width, film.height);
        let scene = world.voxels();
        film.buffer
            .par_iter_mut()
            .enumerate()
            .map(|(pixel_index, pixel_ref)| {
                let hit = trace(pixel_index, width, height, camera, scene);
                *pixel_ref = shade(&hit, format);
                Profile::new(1, scene.len(), hit.is_hit() as usize)
            })
            .reduce(Profile::default, |a, b| a.combine(b))
    }
}
