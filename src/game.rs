//! Turn engine: alternates shots between two boards until one fleet is gone.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::board::Board;
use crate::common::{MatchError, ShotOutcome};
use crate::coord::Coordinate;
use crate::event::{Boards, EventSink, GameEvent};
use crate::selector::TargetSelector;

/// One of the two sides in a match. The challenger always fires first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Challenger,
    Defender,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Challenger => Side::Defender,
            Side::Defender => Side::Challenger,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Challenger => write!(f, "Challenger"),
            Side::Defender => write!(f, "Defender"),
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    AwaitingTurn(Side),
    GameOver { winner: Side },
}

/// A side's board together with the selector it uses to aim at the other
/// board.
pub struct Combatant<'a> {
    board: &'a mut Board,
    selector: Box<dyn TargetSelector + 'a>,
}

impl<'a> Combatant<'a> {
    pub fn new<S: TargetSelector + 'a>(board: &'a mut Board, selector: S) -> Self {
        Self {
            board,
            selector: Box::new(selector),
        }
    }
}

/// What happened on a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub shooter: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

/// Final tally of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: Side,
    /// Rounds played, counting a final round cut short by the win.
    pub rounds: usize,
    pub turns: usize,
    pub challenger_ships_remaining: usize,
    pub defender_ships_remaining: usize,
}

/// Drives two borrowed boards through alternating turns.
pub struct Match<'a> {
    challenger: Combatant<'a>,
    defender: Combatant<'a>,
    observers: Vec<Box<dyn EventSink + 'a>>,
    state: MatchState,
    turns: usize,
}

impl<'a> Match<'a> {
    /// Start a match with the challenger to move. Both sides need ships.
    pub fn new(challenger: Combatant<'a>, defender: Combatant<'a>) -> Result<Self, MatchError> {
        if challenger.board.ships_remaining() == 0 {
            return Err(MatchError::NoShips(Side::Challenger));
        }
        if defender.board.ships_remaining() == 0 {
            return Err(MatchError::NoShips(Side::Defender));
        }
        log::info!(
            "match started: challenger {} ships, defender {} ships",
            challenger.board.ships_remaining(),
            defender.board.ships_remaining()
        );
        Ok(Self {
            challenger,
            defender,
            observers: Vec::new(),
            state: MatchState::AwaitingTurn(Side::Challenger),
            turns: 0,
        })
    }

    /// Builder form of [`Match::register_observer`].
    pub fn with_observer<S: EventSink + 'a>(mut self, observer: S) -> Self {
        self.register_observer(observer);
        self
    }

    /// Append an observer; observers are notified in registration order.
    pub fn register_observer<S: EventSink + 'a>(&mut self, observer: S) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, MatchState::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::GameOver { winner } => Some(winner),
            MatchState::AwaitingTurn(_) => None,
        }
    }

    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Challenger => &*self.challenger.board,
            Side::Defender => &*self.defender.board,
        }
    }

    pub fn turns_taken(&self) -> usize {
        self.turns
    }

    /// Rounds started so far; a round is one shot per side.
    pub fn rounds_played(&self) -> usize {
        self.turns.div_ceil(2)
    }

    /// Let the side to move fire one shot.
    pub fn take_turn(&mut self) -> Result<TurnReport, MatchError> {
        let shooter = match self.state {
            MatchState::AwaitingTurn(side) => side,
            MatchState::GameOver { .. } => return Err(MatchError::GameOver),
        };
        let (acting, target_board) = match shooter {
            Side::Challenger => (&mut self.challenger, &mut *self.defender.board),
            Side::Defender => (&mut self.defender, &mut *self.challenger.board),
        };
        let target = acting
            .selector
            .select_target()
            .map_err(|source| MatchError::Selector {
                side: shooter,
                source,
            })?;
        let outcome = target_board.resolve_shot(target);
        let defeated = target_board.ships_remaining() == 0;
        self.turns += 1;
        log::debug!("turn {}: {} fired at {}: {:?}", self.turns, shooter, target, outcome);

        self.emit(GameEvent::Shot {
            shooter,
            target,
            outcome,
        });
        if defeated {
            self.state = MatchState::GameOver { winner: shooter };
            self.emit(GameEvent::BoardsUpdated {
                round: self.rounds_played(),
            });
            self.emit(GameEvent::GameOver { winner: shooter });
            log::info!("{} won after {} turns", shooter, self.turns);
        } else {
            self.state = MatchState::AwaitingTurn(shooter.opponent());
            if shooter == Side::Defender {
                self.emit(GameEvent::BoardsUpdated {
                    round: self.rounds_played(),
                });
            }
        }
        Ok(TurnReport {
            shooter,
            target,
            outcome,
        })
    }

    /// Play turns until the round completes or the match ends.
    pub fn play_round(&mut self) -> Result<MatchState, MatchError> {
        loop {
            let report = self.take_turn()?;
            if self.is_over() || report.shooter == Side::Defender {
                return Ok(self.state);
            }
        }
    }

    /// Play to the end and report the result.
    pub fn play(&mut self) -> Result<MatchSummary, MatchError> {
        let winner = loop {
            if let MatchState::GameOver { winner } = self.play_round()? {
                break winner;
            }
        };
        Ok(self.summary(winner))
    }

    fn summary(&self, winner: Side) -> MatchSummary {
        MatchSummary {
            winner,
            rounds: self.rounds_played(),
            turns: self.turns,
            challenger_ships_remaining: self.challenger.board.ships_remaining(),
            defender_ships_remaining: self.defender.board.ships_remaining(),
        }
    }

    fn emit(&mut self, event: GameEvent) {
        let boards = Boards {
            challenger: &*self.challenger.board,
            defender: &*self.defender.board,
        };
        for observer in self.observers.iter_mut() {
            observer.notify(&event, &boards);
        }
    }
}
