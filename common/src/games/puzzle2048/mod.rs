mod board;
mod detector;
mod game_state;
mod resolver;
mod settings;
mod spawner;
mod types;

pub use board::Board;
pub use detector::{DEFAULT_WIN_THRESHOLD, has_lost, has_won};
pub use game_state::Puzzle2048GameState;
pub use resolver::{apply_move, can_move};
pub use settings::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, MIN_TARGET_VALUE, Puzzle2048Settings};
pub use spawner::insert_tile;
pub use types::{Cell, Direction, GameStatus, MoveOutcome};
