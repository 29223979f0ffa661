use super::board::Board;
use super::detector::{has_lost, has_won};
use super::resolver::apply_move;
use super::settings::Puzzle2048Settings;
use super::spawner::insert_tile;
use super::types::{Direction, GameStatus, MoveOutcome};
use crate::games::session_rng::SessionRng;
use crate::log;

pub struct Puzzle2048GameState {
    board: Board,
    target_value: u32,
    status: GameStatus,
    moves_made: u32,
}

impl Puzzle2048GameState {
    pub fn new(size: usize, target_value: u32, rng: &mut SessionRng) -> Self {
        let state = Self::from_board(Board::new_game(size, rng), target_value);
        log!(
            "New {}x{} game, target {}, seed {}",
            size,
            size,
            target_value,
            rng.seed()
        );
        state
    }

    pub fn from_settings(settings: &Puzzle2048Settings, rng: &mut SessionRng) -> Self {
        Self::new(settings.board_size as usize, settings.target_value, rng)
    }

    /// Wraps an existing board. The status reflects the board as given.
    pub fn from_board(board: Board, target_value: u32) -> Self {
        let mut state = Self {
            board,
            target_value,
            status: GameStatus::InProgress,
            moves_made: 0,
        };
        state.update_status();
        state
    }

    /// Plays one turn: resolve the move and, if anything changed, spawn a
    /// tile and re-check for a win or a loss. Moves after the game ended are
    /// ignored.
    pub fn apply_move(&mut self, direction: Direction, rng: &mut SessionRng) -> MoveOutcome {
        if self.status.is_terminal() {
            return MoveOutcome::Unchanged;
        }

        let outcome = apply_move(&mut self.board, direction);
        if outcome == MoveOutcome::Unchanged {
            return outcome;
        }

        self.moves_made += 1;
        insert_tile(&mut self.board, rng);
        self.update_status();

        outcome
    }

    fn update_status(&mut self) {
        let previous = self.status;
        if has_won(&self.board, self.target_value) {
            self.status = GameStatus::Won;
        } else if has_lost(&self.board) {
            self.status = GameStatus::Lost;
        }

        if self.status != previous {
            log!(
                "Game finished: {:?} after {} moves, highest tile {}",
                self.status,
                self.moves_made,
                self.highest_tile()
            );
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> Vec<Vec<u32>> {
        self.board.snapshot()
    }

    pub fn highest_tile(&self) -> u32 {
        self.board.highest_tile()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn target_value(&self) -> u32 {
        self.target_value
    }
}
