pub mod utils;
pub mod vec2;

pub use utils::{random_range, random_tenth};
pub use vec2::Vec2;

pub const K_PI: f32 = core::f32::consts::PI;
