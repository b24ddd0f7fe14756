use crate::aabb::AABB;
use crate::math::{Matrix4x4, Vec3};
use crate::ray::Ray;

/// Euler angles (radians) and eye position of the camera, in the unit cube that gets fitted
/// onto the scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewSettings {
    pub roll: f32,
    pub azimuth: f32,
    pub declination: f32,
    pub eye: Vec3,
}

impl ViewSettings {
    /// `Rz(roll) * Ry(azimuth) * Rx(declination)`. The order is significant.
    pub fn rotation(&self) -> Matrix4x4 {
        Matrix4x4::from_angle(self.roll, Vec3::Z)
            * Matrix4x4::from_angle(self.azimuth, Vec3::Y)
            * Matrix4x4::from_angle(self.declination, Vec3::X)
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        crate::presets::VIEW
    }
}

/// Maps the unit cube onto `bbox`: scale by the largest half extent, then move to its center.
///
/// An empty box leaves the unit cube where it is.
pub fn zoom_and_pan(bbox: &AABB) -> Matrix4x4 {
    if bbox.is_empty() {
        return Matrix4x4::IDENTITY;
    }
    Matrix4x4::scale_translate(bbox.max_half_extent(), bbox.center())
}

/// The four vectors the per-pixel ray generation needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraBasis {
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
    pub eye: Vec3,
}

impl CameraBasis {
    pub fn new(view: &ViewSettings, scene_bbox: &AABB, width: usize, height: usize) -> Self {
        // forward: pan * zoom * rot * eye
        // inverse: eye^-1 * rot^T * zoom^-1 * pan^-1, with eye and zoom_n_pan built
        // directly in their inverse form.
        let eye = Matrix4x4::translation(view.eye);
        let mv_inv = eye * view.rotation().transpose() * zoom_and_pan(scene_bbox);

        let aspect = height as f32 / width as f32;
        CameraBasis {
            right: mv_inv.row(0).xyz(),
            up: mv_inv.row(1).xyz() * Vec3::splat(aspect),
            forward: -mv_inv.row(2).xyz(),
            eye: mv_inv.row(3).xyz(),
        }
    }

    /// Unnormalized direction through pixel `(col, row)`; row 0 is the bottom of the image.
    pub fn ray_direction(&self, col: usize, row: usize, width: usize, height: usize) -> Vec3 {
        let u = (2 * col as i64 - width as i64) as f32 * (1.0 / width as f32);
        let v = (2 * row as i64 - height as i64) as f32 * (1.0 / height as f32);
        self.right * Vec3::splat(u) + self.up * Vec3::splat(v) + self.forward
    }

    /// Ray for the pixel at linear, row-major `index`.
    pub fn generate_ray(&self, index: usize, width: usize, height: usize) -> Ray {
        let row = index / width;
        let col = index % width;
        Ray::new(self.eye, self.ray_direction(col, row, width, height))
    }
}
