use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of applying a move to a board
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    NoChange,
    Placed,
    Won { winner: Mark, line: Line },
    Draw,
}

impl MoveOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Won { .. } => true,
            Draw => true,
        }
    }

    /// Whether this outcome ended the game
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Draw)
    }
}

/// One board instance from the first move to a win or draw. X always moves
/// first; the current player only advances while the game stays in progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current: Mark,
    status: Status,
}

impl Game {
    pub fn new() -> Game {
        Self {
            board: Board::new(),
            current: Mark::X,
            status: Default::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn ended(&self) -> bool {
        self.status.is_final()
    }

    fn check_in_progress(&self) -> Result<()> {
        if matches!(self.status, Status::InProgress) {
            Ok(())
        } else {
            Err(GameError::AlreadyEnded)
        }
    }

    /// Place the current player's mark on a free cell.
    ///
    /// A move on an occupied cell changes nothing and reports `NoChange`;
    /// moves after the game ended are refused outright.
    pub fn apply(&mut self, cell: Cell) -> Result<MoveOutcome> {
        use MoveOutcome::*;

        let cell = self.board.validate_cell(cell)?;
        self.check_in_progress()?;

        if self.board[cell].is_some() {
            return Ok(NoChange);
        }

        self.board[cell] = Some(self.current);
        log::debug!("{} placed at cell {}", self.current, cell);

        self.status = self.board.evaluate();
        Ok(match self.status {
            Status::Won { winner, line } => {
                log::debug!("{} wins on line {:?}", winner, line);
                Won { winner, line }
            }
            Status::Draw => {
                log::debug!("board full, game drawn");
                Draw
            }
            Status::InProgress => {
                self.current = self.current.other();
                Placed
            }
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
