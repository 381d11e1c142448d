pub mod card;
pub use card::*;

pub mod rank;
pub use rank::*;

pub mod street;
pub use street::*;

pub mod suit;
pub use suit::*;
