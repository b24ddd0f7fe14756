use crate::math::Vec3;

/// Largest magnitude a reciprocal direction component may take.
///
/// Half of `f32::MAX`, so that `(bound - origin) * rcp` stays away from `0 * inf` products.
pub const RCP_LIMIT: f32 = f32::MAX / 2.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub reciprocal_direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray {
            origin,
            reciprocal_direction: direction
                .reciprocal()
                .clamp(Vec3::splat(-RCP_LIMIT), Vec3::splat(RCP_LIMIT)),
        }
    }
}
