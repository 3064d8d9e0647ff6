//! Match notifications and the sinks that consume them.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::coord::Coordinate;
use crate::game::Side;

/// Something observable happened in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// `shooter` fired at `target` on the other side's board.
    Shot {
        shooter: Side,
        target: Coordinate,
        outcome: ShotOutcome,
    },
    /// Both boards changed; emitted at the end of each round.
    BoardsUpdated { round: usize },
    /// `winner` reduced the other side to zero ships.
    GameOver { winner: Side },
}

/// Read-only view of both boards handed to observers with every event.
#[derive(Clone, Copy)]
pub struct Boards<'b> {
    pub challenger: &'b Board,
    pub defender: &'b Board,
}

impl<'b> Boards<'b> {
    pub fn of(&self, side: Side) -> &'b Board {
        match side {
            Side::Challenger => self.challenger,
            Side::Defender => self.defender,
        }
    }
}

/// Receives match events synchronously, in registration order.
pub trait EventSink {
    fn notify(&mut self, event: &GameEvent, boards: &Boards<'_>);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn notify(&mut self, event: &GameEvent, boards: &Boards<'_>) {
        (**self).notify(event, boards)
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn notify(&mut self, event: &GameEvent, boards: &Boards<'_>) {
        (**self).notify(event, boards)
    }
}

/// Records every event it sees.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Shot outcomes fired by `side`, in order.
    pub fn outcomes_for(&self, side: Side) -> Vec<ShotOutcome> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Shot {
                    shooter, outcome, ..
                } if *shooter == side => Some(*outcome),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: &GameEvent, _boards: &Boards<'_>) {
        self.events.push(*event);
    }
}

/// Forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn notify(&mut self, event: &GameEvent, boards: &Boards<'_>) {
        match event {
            GameEvent::Shot {
                shooter,
                target,
                outcome,
            } => log::debug!("{} fired at {}: {:?}", shooter, target, outcome),
            GameEvent::BoardsUpdated { round } => log::debug!(
                "round {} complete: challenger {} ships, defender {} ships",
                round,
                boards.challenger.ships_remaining(),
                boards.defender.ships_remaining()
            ),
            GameEvent::GameOver { winner } => log::info!("{} wins", winner),
        }
    }
}
