use rand::Rng;
use rand::seq::SliceRandom;

use crate::dynamics::{BodyColor, BodyDef, Boundary};
use crate::math::{Vec2, random_range, random_tenth};

/// Knobs for dropping a new body into the middle of the boundary.
#[derive(Copy, Clone, Debug)]
pub struct DropConfig {
    /// Downward acceleration, in units per tick squared.
    pub gravity: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Each velocity component is drawn from `[-|max_speed|, |max_speed|]`, floored.
    pub max_speed: f32,
    /// `None` picks a random tenth in `[0.0, 0.9]`.
    pub restitution: Option<f32>,
    /// `None` picks a whole radius in `[min_radius, max_radius)`. Swapped
    /// bounds are put back in order.
    pub radius: Option<f32>,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8 * 0.06,
            min_radius: 1.0,
            max_radius: 300.0,
            max_speed: 100.0,
            restitution: None,
            radius: None,
        }
    }
}

pub fn random_drop(rng: &mut impl Rng, boundary: Boundary, config: &DropConfig) -> BodyDef {
    let restitution = match config.restitution {
        Some(r) => r,
        None => random_tenth(rng),
    };

    let radius = match config.radius {
        Some(r) => r,
        None => {
            let (lo, hi) = ordered(config.min_radius, config.max_radius);
            let r = sample_between(rng, lo, hi).floor();
            if r.is_finite() { r.clamp(lo, (hi - 1.0).max(lo)) } else { r }
        }
    };

    let speed = config.max_speed.abs();
    let velocity = Vec2::new(
        sample_between(rng, -speed, speed).floor(),
        sample_between(rng, -speed, speed).floor(),
    );

    let tag = *BodyColor::ALL.choose(rng).unwrap_or(&BodyColor::Red);

    BodyDef {
        position: boundary.center(),
        velocity,
        acceleration: Vec2::new(0.0, config.gravity),
        radius,
        restitution,
        tag,
    }
}

#[inline]
fn ordered(a: f32, b: f32) -> (f32, f32) {
    if b < a { (b, a) } else { (a, b) }
}

/// Uniform in `[lo, hi]`. Non-finite bounds come back unsampled and are
/// rejected later by `BodyDef::validate`.
fn sample_between(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if lo <= hi && (hi - lo).is_finite() {
        random_range(rng, lo, hi)
    } else {
        lo
    }
}
