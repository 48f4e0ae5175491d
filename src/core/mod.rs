// Engine-independent building blocks

pub mod math;
