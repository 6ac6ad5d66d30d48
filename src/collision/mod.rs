pub mod contact;
pub mod resolve;

pub use contact::{Contact, PairKey};
pub use resolve::{resolve, resolve_with_config};
