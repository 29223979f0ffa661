use serde::{Deserialize, Serialize};

use super::detector::DEFAULT_WIN_THRESHOLD;
use crate::config::Validate;

pub const MIN_BOARD_SIZE: u32 = 2;
pub const MAX_BOARD_SIZE: u32 = 10;
pub const MIN_TARGET_VALUE: u32 = 8;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Puzzle2048Settings {
    pub board_size: u32,
    pub target_value: u32,
}

impl Validate for Puzzle2048Settings {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            ));
        }
        if self.target_value < MIN_TARGET_VALUE {
            return Err(format!(
                "Target value must be at least {}, got {}",
                MIN_TARGET_VALUE, self.target_value
            ));
        }
        if !self.target_value.is_power_of_two() {
            return Err(format!(
                "Target value must be a power of 2, got {}",
                self.target_value
            ));
        }
        Ok(())
    }
}

impl Default for Puzzle2048Settings {
    fn default() -> Self {
        Self {
            board_size: 4,
            target_value: DEFAULT_WIN_THRESHOLD,
        }
    }
}
