//! Terminal shell: reading targets from a prompt and printing match events.

use std::fmt::Write as _;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::board::{Board, CellView};
use crate::common::{SelectorError, ShotOutcome};
use crate::coord::Coordinate;
use crate::event::{Boards, EventSink, GameEvent};
use crate::game::Side;
use crate::selector::TargetSelector;

const PROMPT: &str = "Row, Col to target";

/// Parse a `row,col` pair such as `3,4` or ` -1 , 0 `.
pub fn parse_coordinate(input: &str) -> Result<Coordinate, String> {
    let mut parts = input.split(',');
    let (row, col) = match (parts.next(), parts.next(), parts.next()) {
        (Some(row), Some(col), None) => (row.trim(), col.trim()),
        _ => return Err(format!("expected two numbers separated by a comma, got '{}'", input.trim())),
    };
    let row: i32 = row
        .parse()
        .map_err(|_| format!("invalid row '{}'", row))?;
    let col: i32 = col
        .parse()
        .map_err(|_| format!("invalid column '{}'", col))?;
    Ok(Coordinate::new(row, col))
}

/// Selector that asks a human for each target, re-prompting on bad input.
pub struct InteractiveSelector<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl InteractiveSelector<StdinLock<'static>, Stdout> {
    /// Read from stdin and prompt on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InteractiveSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_target(&mut self) -> io::Result<Option<Coordinate>> {
        loop {
            write!(self.output, "{} >>> ", PROMPT)?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_coordinate(&line) {
                Ok(coord) => return Ok(Some(coord)),
                Err(e) => {
                    writeln!(self.output, "Invalid input please input {} ({})", PROMPT, e)?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> TargetSelector for InteractiveSelector<R, W> {
    fn select_target(&mut self) -> Result<Coordinate, SelectorError> {
        match self.read_target() {
            Ok(Some(coord)) => Ok(coord),
            Ok(None) => Err(SelectorError::Exhausted),
            Err(e) => Err(SelectorError::Input(e.to_string())),
        }
    }
}

/// Render a board as a header row followed by one line per grid row.
///
/// `.` unknown, `X` miss, `*` hit, and the 1-based ship number for ships
/// visible on a revealed board.
pub fn render_board(name: &str, board: &Board) -> String {
    let size = board.grid_size();
    let mut out = String::new();
    let _ = write!(out, "{}\t", name);
    for c in 0..size {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    for r in 0..size {
        let _ = write!(out, "{}\t", r);
        for c in 0..size {
            let symbol = match board.view(Coordinate::from_grid(r, c)) {
                Some(CellView::Hit) => '*',
                Some(CellView::Miss) => 'X',
                Some(CellView::Ship(id)) => {
                    char::from_digit(((id.0 + 1) % 36) as u32, 36).unwrap_or('#')
                }
                Some(CellView::Unknown) | None => '.',
            };
            let _ = write!(out, " {}", symbol);
        }
        out.push('\n');
    }
    out
}

/// Prints match events for a human playing as `perspective`.
pub struct TerminalView<W: Write> {
    output: W,
    perspective: Side,
}

impl TerminalView<Stdout> {
    pub fn stdout(perspective: Side) -> Self {
        Self::new(io::stdout(), perspective)
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(output: W, perspective: Side) -> Self {
        Self {
            output,
            perspective,
        }
    }

    pub fn display_title(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nBATTLESHIP!")
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn write_event(&mut self, event: &GameEvent, boards: &Boards<'_>) -> io::Result<()> {
        match event {
            GameEvent::Shot {
                shooter, outcome, ..
            } => {
                if *shooter != self.perspective {
                    write!(self.output, "Enemy fire: ")?;
                }
                match outcome {
                    ShotOutcome::Hit => writeln!(self.output, "Hit!"),
                    ShotOutcome::Sunk => writeln!(self.output, "Hit! You sunk my Battleship!"),
                    ShotOutcome::OutOfBounds => {
                        writeln!(self.output, "Sector is out of game play bounds")
                    }
                    ShotOutcome::AlreadyTargeted => writeln!(
                        self.output,
                        "This sector of the ocean grid has already been targeted."
                    ),
                    ShotOutcome::Miss => writeln!(self.output, "Missed"),
                }
            }
            GameEvent::BoardsUpdated { .. } => {
                let own = boards.of(self.perspective);
                let enemy = boards.of(self.perspective.opponent());
                write!(self.output, "{}", render_board("ENEMY", enemy))?;
                writeln!(self.output)?;
                write!(self.output, "{}", render_board("PLAYER", own))
            }
            GameEvent::GameOver { winner } => {
                if *winner == self.perspective {
                    writeln!(self.output, "You sunk all my battleships!  You WIN!")
                } else {
                    writeln!(
                        self.output,
                        "The enemy has sunk all of your battleships. You lose!"
                    )
                }
            }
        }
    }
}

impl<W: Write> EventSink for TerminalView<W> {
    fn notify(&mut self, event: &GameEvent, boards: &Boards<'_>) {
        if let Err(e) = self.write_event(event, boards) {
            log::warn!("failed to display event {:?}: {}", event, e);
        }
    }
}
