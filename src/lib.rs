//! Rules engine for four-handed partnership euchre.
//!
//! The engine deals from a 24-card deck, runs the two rounds of trump
//! selection, plays five tricks honoring the bowers, and scores rounds until
//! a team reaches the target score.  Every decision comes from a [`Player`],
//! which may be a person at a terminal, a scripted test, or a robot.
#![warn(missing_docs)]

mod bidding;
mod card;
mod deal;
mod deck;
mod game;
mod player;
mod round;
mod trick;


pub use bidding::*;
pub use card::*;
pub use deal::*;
pub use deck::*;
pub use game::*;
pub use player::*;
pub use round::*;
pub use trick::*;
