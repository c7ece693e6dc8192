pub mod color;
mod vec;
mod vec2;
mod vec4;

pub use color::{rgb_to_u32, RG, RGB, RGBA};
pub use vec::Vec3;
pub use vec2::Vec2;
pub use vec4::Vec4;

pub type Point2 = Vec2;
pub type Point3 = Vec3;
