pub mod body;
pub mod boundary;
pub mod spawn;
pub mod stepper;
pub mod world;

pub use body::{Body, BodyColor, BodyDef, InvalidBodySpec};
pub use boundary::Boundary;
pub use spawn::{DropConfig, random_drop};
pub use stepper::FixedStepper;
pub use world::{BodyHandle, World, WorldConfig, pair_mut};
