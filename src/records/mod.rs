pub mod porting;
pub use porting::*;

pub mod record;
pub use record::*;

pub mod store;
pub use store::*;

pub mod tournament;
pub use tournament::*;
