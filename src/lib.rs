pub mod core;
pub mod expression;
pub mod flashcards;
pub mod gui;
pub mod persistence;
