// Ball physics: integration, wall bounces and circle-circle impulses

pub mod body;
mod collision;
mod config;
mod error;
mod world;

pub use body::{Body, Bounds};
pub use config::PhysicsConfig;
pub use error::PhysicsError;
pub use world::{BodyHandle, PhysicsWorld};
