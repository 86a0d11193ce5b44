#![forbid(unsafe_code)]

pub mod hint;
pub mod model;
pub mod scoring;
pub mod time;

pub use hint::{Hint, hint_for, letter_hint};
pub use scoring::ScoringRules;
pub use time::Clock;
