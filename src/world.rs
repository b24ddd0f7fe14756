use crate::aabb::{scene_bounding_box, AABB};
use crate::hittable::{Hit, Hittable};
use crate::math::Vec3;
use crate::presets;
use crate::ray::Ray;

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("scene has no voxels")]
    Empty,
    #[error("voxel {index} has min {min:?} above max {max:?}")]
    InvertedVoxel { index: usize, min: Vec3, max: Vec3 },
}

/// Validated, immutable list of voxels.
#[derive(Clone, Debug)]
pub struct World {
    voxels: Vec<AABB>,
    bounding_box: AABB,
}

impl World {
    pub fn new(voxels: Vec<AABB>) -> Result<World, SceneError> {
        if voxels.is_empty() {
            return Err(SceneError::Empty);
        }
        if let Some((index, voxel)) = voxels.iter().enumerate().find(|(_, v)| v.is_empty()) {
            return Err(SceneError::InvertedVoxel {
                index,
                min: voxel.min,
                max: voxel.max,
            });
        }
        let bounding_box = scene_bounding_box(&voxels);
        debug!("scene bounding box is {:?}", bounding_box);
        Ok(World {
            voxels,
            bounding_box,
        })
    }

    pub fn default_scene() -> World {
        info!("using built in scene of {} voxels", presets::VOXELS.len());
        World {
            voxels: presets::VOXELS.to_vec(),
            bounding_box: scene_bounding_box(&presets::VOXELS),
        }
    }

    pub fn voxels(&self) -> &[AABB] {
        &self.voxels
    }

    pub fn bounding_box(&self) -> AABB {
        self.bounding_box
    }
}

impl Hittable for World {
    fn hit(&self, ray: &Ray) -> Hit {
        self.voxels.hit(ray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_scene() {
        assert_eq!(World::new(vec![]).unwrap_err(), SceneError::Empty);
    }

    #[test]
    fn test_rejects_inverted_voxel() {
        let good = AABB::new(Vec3::ZERO, Vec3::splat(1.0));
        let bad = AABB::new(Vec3::new(0.0, 2.0, 0.0), Vec3::splat(1.0));
        match World::new(vec![good, bad]) {
            Err(SceneError::InvertedVoxel { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected an inverted voxel error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_scene() {
        let world = World::default_scene();
        assert_eq!(world.voxels().len(), 2);
        let bbox = world.bounding_box();
        assert_eq!(bbox.min, Vec3::splat(-0.75));
        assert_eq!(bbox.max, Vec3::splat(0.75));

        let validated = World::new(presets::VOXELS.to_vec()).unwrap();
        assert_eq!(validated.bounding_box(), bbox);
    }

    #[test]
    fn test_flat_voxel_is_accepted() {
        let flat = AABB::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0));
        assert!(World::new(vec![flat]).is_ok());
    }

    #[test]
    fn test_ray_query() {
        let world = World::default_scene();
        let hit = world.hit(&Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z));
        assert!(hit.is_hit());
        assert_eq!(hit.distance, 4.25);
    }
}
