use clap::Parser;
use common::games::puzzle2048::Puzzle2048Settings;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "puzzle2048", about = "Slide and merge tiles until you reach the target")]
pub struct Args {
    /// YAML settings file; a missing file means defaults
    #[arg(long, default_value = "puzzle2048.yaml")]
    pub config: PathBuf,

    /// Board dimension, overrides the config file
    #[arg(long)]
    pub size: Option<u32>,

    /// Winning tile value, overrides the config file
    #[arg(long)]
    pub target: Option<u32>,

    /// Seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write log lines to this file instead of dropping them
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Store the effective settings back into the config file
    #[arg(long)]
    pub save_config: bool,
}

impl Args {
    pub fn apply_overrides(&self, mut settings: Puzzle2048Settings) -> Puzzle2048Settings {
        if let Some(size) = self.size {
            settings.board_size = size;
        }
        if let Some(target) = self.target {
            settings.target_value = target;
        }
        settings
    }
}
