mod extract;
mod grid;
mod map;
mod serial;

pub use grid::*;
pub use map::*;
pub use serial::*;
