use core::fmt;

use crate::dynamics::Boundary;
use crate::math::{K_PI, Vec2};

/// Per-tick velocity damping applied after acceleration.
pub const VELOCITY_DAMPING: f32 = 0.99;

/// Render tag carried by each body. The simulation never reads it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BodyColor {
    #[default]
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Teal,
    Violet,
}

impl BodyColor {
    pub const ALL: [BodyColor; 7] = [
        BodyColor::Red,
        BodyColor::Orange,
        BodyColor::Yellow,
        BodyColor::Green,
        BodyColor::Blue,
        BodyColor::Teal,
        BodyColor::Violet,
    ];
}

/// Why a [`BodyDef`] was refused.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InvalidBodySpec {
    /// Radius must be finite and strictly positive.
    Radius(f32),
    /// The named field holds a NaN or infinite component.
    NonFinite(&'static str),
}

impl fmt::Display for InvalidBodySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidBodySpec::Radius(r) => {
                write!(f, "invalid body spec: radius must be finite and > 0, got {r}")
            }
            InvalidBodySpec::NonFinite(field) => {
                write!(f, "invalid body spec: {field} is not finite")
            }
        }
    }
}

impl std::error::Error for InvalidBodySpec {}

#[derive(Copy, Clone, Debug)]
pub struct BodyDef {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub radius: f32,
    /// Expected in `[0, 1]` but not clamped; values above 1 add energy on every bounce.
    pub restitution: f32,
    pub tag: BodyColor,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            radius: 10.0,
            restitution: 1.0,
            tag: BodyColor::Red,
        }
    }
}

impl BodyDef {
    pub fn validate(&self) -> Result<(), InvalidBodySpec> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(InvalidBodySpec::Radius(self.radius));
        }
        if !self.position.is_finite() {
            return Err(InvalidBodySpec::NonFinite("position"));
        }
        if !self.velocity.is_finite() {
            return Err(InvalidBodySpec::NonFinite("velocity"));
        }
        if !self.acceleration.is_finite() {
            return Err(InvalidBodySpec::NonFinite("acceleration"));
        }
        if !self.restitution.is_finite() {
            return Err(InvalidBodySpec::NonFinite("restitution"));
        }
        Ok(())
    }
}

/// A solid disc. Radius and mass are fixed at construction.
#[derive(Copy, Clone, Debug)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,

    pub restitution: f32,
    pub tag: BodyColor,

    radius: f32,
    mass: f32,
}

impl Body {
    pub fn from_def(def: BodyDef) -> Result<Self, InvalidBodySpec> {
        def.validate()?;

        Ok(Self {
            position: def.position,
            velocity: def.velocity,
            acceleration: def.acceleration,
            restitution: def.restitution,
            tag: def.tag,
            radius: def.radius,
            mass: K_PI * def.radius * def.radius,
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Area of the disc, `pi * r^2`.
    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.position).length() <= self.radius
    }

    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.mass * self.velocity
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn integrate(&mut self, boundary: Boundary) {
        self.integrate_damped(boundary, VELOCITY_DAMPING);
    }

    /// One unit-time step. Displacement uses the velocity from the previous
    /// tick; acceleration only shows up in the next tick's displacement.
    pub fn integrate_damped(&mut self, boundary: Boundary, damping: f32) {
        self.position = self.position + self.velocity;

        self.apply_boundary(boundary);

        self.velocity = (self.velocity + self.acceleration) * damping;
    }

    /// Clamp into the boundary and reflect the matching velocity component,
    /// scaled by restitution. Axes are checked independently so a corner hit
    /// bounces on both.
    pub fn apply_boundary(&mut self, boundary: Boundary) {
        let floor = boundary.height - self.radius;
        let right_wall = boundary.width - self.radius;

        if self.position.y > floor {
            self.position = self.position.with_y(floor);
            self.velocity = self.velocity.with_y(-self.velocity.y * self.restitution);
        }

        if self.position.y < self.radius {
            self.position = self.position.with_y(self.radius);
            self.velocity = self.velocity.with_y(-self.velocity.y * self.restitution);
        }

        if self.position.x > right_wall {
            self.position = self.position.with_x(right_wall);
            self.velocity = self.velocity.with_x(-self.velocity.x * self.restitution);
        }

        if self.position.x < self.radius {
            self.position = self.position.with_x(self.radius);
            self.velocity = self.velocity.with_x(-self.velocity.x * self.restitution);
        }
    }
}
