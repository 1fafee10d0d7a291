mod body;
mod constants;
mod cruiser;
mod kart;

pub use body::{KinematicBody, RigidBody, RIDE_HEIGHT};
pub use cruiser::Cruiser;
pub use kart::{DriftState, Kart, KartState, SteerSide};
