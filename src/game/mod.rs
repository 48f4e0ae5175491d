// Sandbox rules on top of the engine

mod sandbox;
mod spawn;

pub use sandbox::Sandbox;
pub use spawn::BALL_RADIUS;
