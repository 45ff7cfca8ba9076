use rand::Rng;
use smallvec::SmallVec;

use crate::*;

/// Cell where `mark` would complete a line, probing free cells in ascending
/// index order on a copy of the board
fn winning_cell(board: &Board, mark: Mark) -> Option<Cell> {
    board.empty_cells().find(|&cell| {
        let mut probe = *board;
        probe[cell] = Some(mark);
        matches!(probe.evaluate(), Status::Won { winner, .. } if winner == mark)
    })
}

/// Uniformly random free cell among `candidates`
fn pick_free<R: Rng + ?Sized>(board: &Board, candidates: &[Cell], rng: &mut R) -> Option<Cell> {
    let free: SmallVec<[Cell; 4]> = candidates
        .iter()
        .copied()
        .filter(|&cell| board[cell].is_none())
        .collect();
    if free.is_empty() {
        None
    } else {
        Some(free[rng.random_range(0..free.len())])
    }
}

/// Pick the bot's next move for `own`, strongest option first:
///
/// 1. complete an own line,
/// 2. block the opponent from completing one,
/// 3. the center,
/// 4. a random free corner,
/// 5. a random free edge,
/// 6. any random free cell.
///
/// The win and block probes look exactly one move ahead; deeper search buys
/// nothing worth having on a 3x3 board. Tie-breaks in steps 1 and 2 are the
/// lowest index, in steps 4 to 6 uniformly random from `rng`.
///
/// The board is never mutated. Callers must only ask for a move while the
/// game is in progress, so at least one cell is free.
pub fn select_move<R: Rng + ?Sized>(board: &Board, own: Mark, rng: &mut R) -> Cell {
    if let Some(cell) = winning_cell(board, own) {
        log::debug!("bot {} takes winning cell {}", own, cell);
        return cell;
    }
    if let Some(cell) = winning_cell(board, own.other()) {
        log::debug!("bot {} blocks cell {}", own, cell);
        return cell;
    }
    if board[CENTER].is_none() {
        return CENTER;
    }
    if let Some(cell) = pick_free(board, &CORNERS, rng) {
        return cell;
    }
    if let Some(cell) = pick_free(board, &EDGES, rng) {
        return cell;
    }

    // center, corners and edges cover the whole board, so this only triggers
    // on boards that never went through normal play
    log::warn!("bot {} found no center, corner or edge free, falling back", own);
    let free: SmallVec<[Cell; CELL_COUNT]> = board.empty_cells().collect();
    free[rng.random_range(0..free.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    fn board_with(xs: &[Cell], os: &[Cell]) -> Board {
        let mut board = Board::new();
        for &cell in xs {
            board[cell] = Some(Mark::X);
        }
        for &cell in os {
            board[cell] = Some(Mark::O);
        }
        board
    }

    #[test]
    fn takes_the_winning_cell_when_one_exists() {
        // X completes the left column at 6
        let board = board_with(&[0, 3], &[1, 2]);

        assert_eq!(select_move(&board, Mark::X, &mut rng()), 6);
    }

    #[test]
    fn prefers_the_lowest_winning_cell() {
        // X can win at 2 (top row) or 6 (left column)
        let board = board_with(&[0, 1, 3], &[4, 5]);

        assert_eq!(select_move(&board, Mark::X, &mut rng()), 2);
    }

    #[test]
    fn blocks_the_opponent_when_it_cannot_win() {
        // X threatens the top row at 2, O has no win of its own
        let board = board_with(&[0, 1], &[4]);

        assert_eq!(select_move(&board, Mark::O, &mut rng()), 2);
    }

    #[test]
    fn winning_beats_blocking() {
        // X threatens the top row at 2, but O completes the middle row at 3
        let board = board_with(&[0, 1], &[4, 5]);

        assert_eq!(select_move(&board, Mark::O, &mut rng()), 3);
    }

    #[test]
    fn takes_the_center_when_no_tactical_move_exists() {
        let board = board_with(&[0], &[]);

        assert_eq!(select_move(&board, Mark::O, &mut rng()), CENTER);
    }

    #[test]
    fn takes_a_corner_once_the_center_is_gone() {
        let board = board_with(&[4], &[]);

        let cell = select_move(&board, Mark::O, &mut rng());
        assert!(CORNERS.contains(&cell), "expected a corner, got {cell}");
    }

    #[test]
    fn takes_an_edge_once_center_and_corners_are_gone() {
        // O . X / X X O / O . X with no one-move win or block pending
        let board = board_with(&[2, 3, 4, 8], &[0, 5, 6]);
        assert_eq!(board.evaluate(), Status::InProgress);

        let cell = select_move(&board, Mark::O, &mut rng());
        assert!(EDGES.contains(&cell), "expected an edge, got {cell}");
        assert!(board[cell].is_none());
    }

    #[test]
    fn same_seed_picks_the_same_cell() {
        let board = board_with(&[4], &[]);

        let first = select_move(&board, Mark::O, &mut SmallRng::seed_from_u64(42));
        let second = select_move(&board, Mark::O, &mut SmallRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
