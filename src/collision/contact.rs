use crate::dynamics::BodyHandle;
use crate::math::Vec2;

/// A resolved disc-disc contact.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Contact {
    /// Point on the rim of the first body, before positional correction.
    pub position: Vec2,
    /// Unit normal pointing from the first body to the second.
    pub normal: Vec2,
    /// `r1 + r2 - dist`, always positive.
    pub overlap: f32,
    /// Impulse magnitude applied along `normal`.
    pub impulse: f32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    pub body1: BodyHandle,
    pub body2: BodyHandle,
}

impl PairKey {
    #[inline]
    pub fn new(b1: BodyHandle, b2: BodyHandle) -> Self {
        let (body1, body2) = if b1 <= b2 { (b1, b2) } else { (b2, b1) };
        Self { body1, body2 }
    }
}
