//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Combatant, Coordinate, DeployEngine, EventSink, GameConfig, GameEvent, Match,
    RandomDeployEngine, RandomSelector, ShotOutcome, Side, TargetSelector,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, InteractiveSelector, TerminalView};
