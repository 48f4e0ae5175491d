// Engine modules: frame scheduling, input, physics, renderer

pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
