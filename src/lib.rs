pub mod geometry;
pub mod hittable;
pub mod math;
pub mod parsing;
pub mod profile;
pub mod ray;
pub mod renderer;
pub mod scene;

pub use math::rgb_to_u32;
