pub mod position;
pub use position::*;

pub mod rotation;
pub use rotation::*;
