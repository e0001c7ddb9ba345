pub mod card;
pub mod matching;
pub mod trade;
pub mod user;
