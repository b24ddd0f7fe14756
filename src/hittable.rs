use crate::aabb::AABB;
use crate::math::Vec3;
use crate::ray::Ray;

/// The axis whose slab supplied the entry point of a hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub distance: f32,
    pub axis: Axis,
}

impl Hit {
    pub const MISS: Hit = Hit {
        distance: f32::INFINITY,
        axis: Axis::Z,
    };

    pub fn is_hit(&self) -> bool {
        self.distance != f32::INFINITY
    }
}

impl Default for Hit {
    fn default() -> Self {
        Hit::MISS
    }
}

pub trait Hittable {
    fn hit(&self, ray: &Ray) -> Hit;
}

impl Hittable for AABB {
    // slab test. a ray starting on a face or grazing an edge is a miss.
    fn hit(&self, ray: &Ray) -> Hit {
        let t0 = (self.min - ray.origin) * ray.reciprocal_direction;
        let t1 = (self.max - ray.origin) * ray.reciprocal_direction;

        let axial_min = t0.min(t1);
        let axial_max = t0.max(t1);

        let x_over_y = axial_min.x >= axial_min.y;
        let xy_over_z = axial_min.x.max(axial_min.y) >= axial_min.z;
        let axis = match (xy_over_z, x_over_y) {
            (true, true) => Axis::X,
            (true, false) => Axis::Y,
            (false, _) => Axis::Z,
        };

        let entry = axial_min.max_element();
        let exit = axial_max.min_element();

        let distance = if 0.0 < entry && entry < exit {
            entry
        } else {
            f32::INFINITY
        };
        Hit { distance, axis }
    }
}

/// Closest hit over a list, by brute force.
///
/// Only a strictly closer hit replaces the current one, so among equally distant hits the
/// earliest element wins.
impl<T: Hittable> Hittable for [T] {
    fn hit(&self, ray: &Ray) -> Hit {
        self.iter().fold(Hit::MISS, |closest, item| {
            let hit = item.hit(ray);
            if hit.distance < closest.distance {
                hit
            } else {
                closest
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> AABB {
        AABB::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_head_on_hit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        let hit = unit_box().hit(&ray);
        assert!(hit.is_hit());
        assert_relative_eq!(hit.distance, 4.0, max_relative = 1e-5);
        assert_eq!(hit.axis, Axis::Z);
    }

    #[test]
    fn test_oblique_hit_matches_analytic_entry() {
        let bbox = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        let origin = Vec3::new(-3.0, 0.25, 0.5);
        let direction = Vec3::new(1.5, 0.1, 0.0);
        let hit = bbox.hit(&Ray::new(origin, direction));
        // x slab entry at (0 - -3) / 1.5
        assert_relative_eq!(hit.distance, 2.0, max_relative = 1e-5);
        assert_eq!(hit.axis, Axis::X);

        let hit = bbox.hit(&Ray::new(Vec3::new(1.0, -2.0, 0.5), Vec3::new(0.0, 0.5, 0.0)));
        assert_relative_eq!(hit.distance, 4.0, max_relative = 1e-5);
        assert_eq!(hit.axis, Axis::Y);
    }

    #[test]
    fn test_misses() {
        // pointing away
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert_eq!(unit_box().hit(&ray).distance, f32::INFINITY);
        // passing beside
        let ray = Ray::new(Vec3::new(3.0, 0.0, 5.0), -Vec3::Z);
        assert!(!unit_box().hit(&ray).is_hit());
        // origin inside the box, entry is behind the origin
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(!unit_box().hit(&ray).is_hit());
        // origin exactly on a face
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), -Vec3::Z);
        assert!(!unit_box().hit(&ray).is_hit());
    }

    #[test]
    fn test_grazing_edge_is_a_miss() {
        // travels along the plane x = 1, touching the box only on its boundary
        let ray = Ray::new(Vec3::new(1.0, 5.0, 1.0), -Vec3::Y);
        assert!(!unit_box().hit(&ray).is_hit());
    }

    #[test]
    fn test_closest_hit_in_list() {
        let near = AABB::new(Vec3::new(-1.0, -1.0, 1.0), Vec3::new(1.0, 1.0, 2.0));
        let far = AABB::new(Vec3::new(-1.0, -1.0, -2.0), Vec3::new(1.0, 1.0, -1.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);

        let a = [far, near].hit(&ray);
        let b = [near, far].hit(&ray);
        assert_eq!(a, b);
        assert_relative_eq!(a.distance, 3.0, max_relative = 1e-5);

        let empty: [AABB; 0] = [];
        assert_eq!(empty.hit(&ray), Hit::MISS);
    }
}
