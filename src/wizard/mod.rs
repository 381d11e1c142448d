pub mod draft;
pub use draft::*;

pub mod step;
pub use step::*;

pub mod wizard;
pub use wizard::*;
