#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod coord;
mod event;
mod game;
mod placement;
mod selector;
mod ship;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::Coordinate;
pub use event::*;
pub use game::*;
pub use placement::*;
pub use selector::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use cli::{InteractiveSelector, TerminalView};
#[cfg(feature = "std")]
pub use logging::init_logging;
