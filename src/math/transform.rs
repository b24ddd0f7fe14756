use super::vec::{Vec3, Vec4};

use std::ops::Mul;

/// Row-major 4x4 matrix, applied to row vectors (`v * m`).
///
/// Row 3 holds the translation, so a point transforms as
/// `m[0] * x + m[1] * y + m[2] * z + m[3]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4(pub [Vec4; 4]);

impl Matrix4x4 {
    pub const IDENTITY: Matrix4x4 = Matrix4x4([
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    ]);

    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Matrix4x4([
            Vec4(rows[0]),
            Vec4(rows[1]),
            Vec4(rows[2]),
            Vec4(rows[3]),
        ])
    }

    pub fn row(&self, index: usize) -> Vec4 {
        self.0[index]
    }

    pub fn transpose(&self) -> Self {
        let m = &self.0;
        Matrix4x4::from_rows([
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        ])
    }

    /// Rotation by the angle given as `(sin, cos)` around `axis`.
    ///
    /// `axis` must already be unit length, it is not normalized here.
    pub fn rotation(sin_a: f32, cos_a: f32, axis: Vec3) -> Self {
        let Vec3 { x, y, z } = axis;
        Matrix4x4::from_rows([
            [
                x * x + cos_a * (1.0 - x * x),
                x * y - cos_a * (x * y) + sin_a * z,
                x * z - cos_a * (x * z) - sin_a * y,
                0.0,
            ],
            [
                y * x - cos_a * (y * x) - sin_a * z,
                y * y + cos_a * (1.0 - y * y),
                y * z - cos_a * (y * z) + sin_a * x,
                0.0,
            ],
            [
                z * x - cos_a * (z * x) + sin_a * y,
                z * y - cos_a * (z * y) - sin_a * x,
                z * z + cos_a * (1.0 - z * z),
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn from_angle(angle: f32, axis: Vec3) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Matrix4x4::rotation(sin_a, cos_a, axis)
    }

    pub fn translation(shift: Vec3) -> Self {
        Matrix4x4::scale_translate(1.0, shift)
    }

    /// Uniform scale followed by a translation.
    pub fn scale_translate(scale: f32, shift: Vec3) -> Self {
        Matrix4x4::from_rows([
            [scale, 0.0, 0.0, 0.0],
            [0.0, scale, 0.0, 0.0],
            [0.0, 0.0, scale, 0.0],
            [shift.x, shift.y, shift.z, 1.0],
        ])
    }

    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.0;
        let r = m[0] * Vec4::splat(p.x) + m[1] * Vec4::splat(p.y) + m[2] * Vec4::splat(p.z) + m[3];
        r.xyz()
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;
    fn mul(self, rhs: Matrix4x4) -> Self::Output {
        let a = &self.0;
        let b = &rhs.0;
        let row = |i: usize| {
            Vec4::splat(a[i][0]) * b[0]
                + Vec4::splat(a[i][1]) * b[1]
                + Vec4::splat(a[i][2]) * b[2]
                + Vec4::splat(a[i][3]) * b[3]
        };
        Matrix4x4([row(0), row(1), row(2), row(3)])
    }
}

impl Mul<Matrix4x4> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: Matrix4x4) -> Vec3 {
        rhs.transform_point(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_8};

    fn assert_matrix_eq(a: &Matrix4x4, b: &Matrix4x4) {
        for i in 0..4 {
            for j in 0..4 {
                assert_relative_eq!(a.0[i][j], b.0[i][j], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_quarter_turn_around_z() {
        let m = Matrix4x4::from_angle(FRAC_PI_2, Vec3::Z);
        let rotated = Vec3::X * m;
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_transpose_is_inverse() {
        let rot = Matrix4x4::from_angle(FRAC_PI_8, Vec3::Z)
            * Matrix4x4::from_angle(0.3, Vec3::Y)
            * Matrix4x4::from_angle(-1.1, Vec3::X);
        assert_matrix_eq(&(rot * rot.transpose()), &Matrix4x4::IDENTITY);
    }

    #[test]
    fn test_identity_and_transpose() {
        let m = Matrix4x4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(m * Matrix4x4::IDENTITY, m);
        assert_eq!(Matrix4x4::IDENTITY * m, m);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().row(0), Vec4::new(1.0, 5.0, 9.0, 13.0));
    }

    #[test]
    fn test_product_order() {
        // scale then shift, applied to a row vector left to right
        let m = Matrix4x4::scale_translate(2.0, Vec3::ZERO) * Matrix4x4::translation(Vec3::X);
        assert_eq!(Vec3::new(1.0, 1.0, 1.0) * m, Vec3::new(3.0, 2.0, 2.0));
        let m = Matrix4x4::translation(Vec3::X) * Matrix4x4::scale_translate(2.0, Vec3::ZERO);
        assert_eq!(Vec3::new(1.0, 1.0, 1.0) * m, Vec3::new(4.0, 2.0, 2.0));
    }
}
