pub mod cards;
pub mod hand;
pub mod records;
pub mod seating;
pub mod wizard;
