mod belt;
mod body;
mod orrery;

pub mod catalog;

pub use belt::{scatter_belt, AsteroidParticle, BELT_COUNT};
pub use body::{Body, BodyID, BodyInfo, Classification};
pub use orrery::{Orrery, SelectionSnapshot, SPIN_STEP};
