use crate::math::Vec2;

/// The rectangle `[0, width] x [0, height]` that bodies bounce inside.
/// Screen coordinates: `y` grows downwards, so `height` is the floor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Boundary {
    pub width: f32,
    pub height: f32,
}

impl Boundary {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(0.5 * self.width, 0.5 * self.height)
    }

    /// Whether a disc of `radius` has room to sit anywhere inside.
    #[inline]
    pub fn fits(self, radius: f32) -> bool {
        2.0 * radius <= self.width && 2.0 * radius <= self.height
    }
}
