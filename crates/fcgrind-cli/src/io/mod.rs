pub mod cards;
pub mod catalog;
