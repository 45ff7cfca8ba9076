use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

use crate::*;

/// Terminal evaluation of a board.
///
/// Valid transitions per board instance:
/// - InProgress -> Won
/// - InProgress -> Draw
///
/// Won and Draw are final; a fresh board is required to play again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Moves are still being accepted
    InProgress,
    /// One mark holds a full line
    Won { winner: Mark, line: Line },
    /// All cells taken without a winning line
    Draw,
}

impl Status {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_final(self) -> bool {
        use Status::*;
        match self {
            InProgress => false,
            Won { .. } => true,
            Draw => true,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::InProgress
    }
}

/// The 3x3 grid, row-major. `Copy` so hypothetical placements can be probed
/// on a stack copy without touching the live board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board([Option<Mark>; CELL_COUNT]);

impl Board {
    pub const fn new() -> Self {
        Self([None; CELL_COUNT])
    }

    pub fn validate_cell(&self, cell: Cell) -> Result<Cell> {
        if cell < CELL_COUNT {
            Ok(cell)
        } else {
            Err(GameError::InvalidCell)
        }
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|cell| cell.is_some())
    }

    /// Free cells in ascending index order
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_none())
            .map(|(cell, _)| cell)
    }

    /// Check each line in the fixed scan order and report the first one fully
    /// held by a single mark, a full board as a draw, anything else as still
    /// in progress. Pure: used on the live board after each move and on
    /// hypothetical boards by the bot.
    pub fn evaluate(&self) -> Status {
        for &line in &LINES {
            let [a, b, c] = line;
            if let Some(winner) = self[a] {
                if self[b] == Some(winner) && self[c] == Some(winner) {
                    return Status::Won { winner, line };
                }
            }
        }
        if self.is_full() {
            Status::Draw
        } else {
            Status::InProgress
        }
    }
}

impl Index<Cell> for Board {
    type Output = Option<Mark>;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.0[cell]
    }
}

impl IndexMut<Cell> for Board {
    fn index_mut(&mut self, cell: Cell) -> &mut Self::Output {
        &mut self.0[cell]
    }
}
