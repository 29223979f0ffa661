use super::board::Board;
use super::resolver::can_move;
use super::types::Direction;

pub const DEFAULT_WIN_THRESHOLD: u32 = 2048;

pub fn has_won(board: &Board, threshold: u32) -> bool {
    board.any_cell_at_least(threshold)
}

pub fn has_lost(board: &Board) -> bool {
    Direction::ALL
        .iter()
        .all(|&direction| !can_move(board, direction))
}
