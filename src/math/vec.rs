use std::ops::{Add, Index, Mul, Neg, Sub};

/// Three component cartesian vector.
///
/// There is no implicit scalar conversion, scale by a scalar with `v * Vec3::splat(s)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const fn splat(same: f32) -> Vec3 {
        Vec3::new(same, same, same)
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    pub const INFINITY: Vec3 = Vec3::splat(f32::INFINITY);
    pub const NEG_INFINITY: Vec3 = Vec3::splat(f32::NEG_INFINITY);
}

impl Vec3 {
    /// Component-wise `1 / v`.
    ///
    /// Zero components saturate to `f32::MAX` instead of producing an infinity,
    /// so that the result is reproducible wherever it is evaluated.
    pub fn reciprocal(self) -> Vec3 {
        fn rcp(v: f32) -> f32 {
            if v != 0.0 {
                1.0 / v
            } else {
                f32::MAX
            }
        }
        Vec3::new(rcp(self.x), rcp(self.y), rcp(self.z))
    }

    pub fn min(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    pub fn max(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    pub fn clamp(self, min: Vec3, max: Vec3) -> Vec3 {
        self.min(max).max(min)
    }

    pub fn max_element(&self) -> f32 {
        self.x.max(self.y).max(self.z)
    }

    pub fn min_element(&self) -> f32 {
        self.x.min(self.y).min(self.z)
    }

    pub fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        self + (-other)
    }
}

impl Mul for Vec3 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

/// Four component vector, used as a matrix row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec4(pub [f32; 4]);

impl Vec4 {
    pub const fn new(e0: f32, e1: f32, e2: f32, e3: f32) -> Vec4 {
        Vec4([e0, e1, e2, e3])
    }
    pub const fn splat(same: f32) -> Vec4 {
        Vec4([same; 4])
    }

    /// The first three components, dropping `w`.
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], self.0[2])
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl Neg for Vec4 {
    type Output = Vec4;
    fn neg(self) -> Vec4 {
        let [a, b, c, d] = self.0;
        Vec4::new(-a, -b, -c, -d)
    }
}

impl Add for Vec4 {
    type Output = Vec4;
    fn add(self, other: Vec4) -> Vec4 {
        Vec4::new(
            self[0] + other[0],
            self[1] + other[1],
            self[2] + other[2],
            self[3] + other[3],
        )
    }
}

impl Sub for Vec4 {
    type Output = Vec4;
    fn sub(self, other: Vec4) -> Vec4 {
        self + (-other)
    }
}

impl Mul for Vec4 {
    type Output = Vec4;
    fn mul(self, other: Vec4) -> Vec4 {
        Vec4::new(
            self[0] * other[0],
            self[1] * other[1],
            self[2] * other[2],
            self[3] * other[3],
        )
    }
}
