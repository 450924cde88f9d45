//! Command implementations for the tournament dashboard CLI

pub mod common;
pub mod output;
pub mod roster;
pub mod simulation;
pub mod weeks;


pub use common::{handle_open, show_route, CommandContext};
