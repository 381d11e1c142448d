pub mod action;
pub use action::*;

pub mod ending;
pub use ending::*;

pub mod tags;
pub use tags::*;
