mod transform;
mod vec;

pub use transform::Matrix4x4;
pub use vec::{Vec3, Vec4};
