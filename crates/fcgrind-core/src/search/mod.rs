pub mod enumerate;
pub mod matches;
mod window;

pub use enumerate::{all_card_matches, card_matches};
pub use matches::{BitMatch, PatternSignature};
