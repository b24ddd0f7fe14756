use crate::math::Vec3;

pub trait HasBoundingBox {
    fn aabb(&self) -> AABB;
}

/// Axis aligned box, the only primitive the tracer knows about.
///
/// `min <= max` on every axis is the caller's responsibility, except for [`AABB::empty`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        AABB { min, max }
    }
    // empty AABB contains nothing, and must never be intersected.
    pub const fn empty() -> Self {
        AABB::new(Vec3::INFINITY, Vec3::NEG_INFINITY)
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn expand(mut self, other: &AABB) -> AABB {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self
    }

    pub fn center(&self) -> Vec3 {
        (self.max + self.min) * Vec3::splat(0.5)
    }

    pub fn half_extent(&self) -> Vec3 {
        (self.max - self.min) * Vec3::splat(0.5)
    }

    pub fn max_half_extent(&self) -> f32 {
        self.half_extent().max_element()
    }
}

impl Default for AABB {
    fn default() -> AABB {
        AABB::empty()
    }
}

impl HasBoundingBox for AABB {
    fn aabb(&self) -> AABB {
        *self
    }
}

/// Folds the boxes of a scene into the box enclosing all of them.
///
/// An empty scene yields [`AABB::empty`].
pub fn scene_bounding_box<T: HasBoundingBox>(scene: &[T]) -> AABB {
    scene
        .iter()
        .fold(AABB::empty(), |acc, item| acc.expand(&item.aabb()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_bounding_box() {
        let scene = [
            AABB::new(Vec3::new(-0.75, -0.75, -0.75), Vec3::new(0.25, 0.25, 0.25)),
            AABB::new(Vec3::new(-0.25, -0.25, -0.25), Vec3::new(0.75, 0.75, 0.75)),
            AABB::new(Vec3::new(0.0, -3.0, 1.0), Vec3::new(0.5, -2.0, 4.0)),
        ];
        let bbox = scene_bounding_box(&scene);
        assert_eq!(bbox.min, Vec3::new(-0.75, -3.0, -0.75));
        assert_eq!(bbox.max, Vec3::new(0.75, 0.75, 4.0));
        assert!(!bbox.is_empty());
    }

    #[test]
    fn test_empty_scene_is_sentinel() {
        let bbox = scene_bounding_box::<AABB>(&[]);
        assert_eq!(bbox.min, Vec3::INFINITY);
        assert_eq!(bbox.max, Vec3::NEG_INFINITY);
        assert!(bbox.is_empty());
        assert_eq!(bbox, AABB::default());
    }

    #[test]
    fn test_center_and_extent() {
        let bbox = AABB::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 1.0, 6.0));
        assert_eq!(bbox.center(), Vec3::new(0.0, 0.5, 4.0));
        assert_eq!(bbox.half_extent(), Vec3::new(1.0, 0.5, 2.0));
        assert_eq!(bbox.max_half_extent(), 2.0);
    }
}
