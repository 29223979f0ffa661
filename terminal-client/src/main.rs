mod cli;
mod game_loop;
mod input;
mod render;

use clap::Parser;
use common::config::{ConfigManager, FileContentConfigProvider, Validate};
use common::games::SessionRng;
use common::games::puzzle2048::{Puzzle2048GameState, Puzzle2048Settings};
use common::log;
use common::logger::{self, LogSink};

use cli::Args;
use game_loop::{KeyboardActionSource, SessionEnd, TerminalGuard, play};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        logger::init_logger(Some("Terminal".to_string()), LogSink::file(path)?);
    }

    let config_manager: ConfigManager<FileContentConfigProvider, Puzzle2048Settings> =
        ConfigManager::from_yaml_file(&args.config);
    let settings = args.apply_overrides(config_manager.get_config()?);
    settings.validate()?;

    if args.save_config {
        config_manager.set_config(&settings)?;
        log!("Settings saved to {}", args.config.display());
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut state = Puzzle2048GameState::from_settings(&settings, &mut rng);

    let end = {
        let _guard = TerminalGuard::enter()?;
        let mut stdout = std::io::stdout();
        play(&mut state, &mut rng, &mut KeyboardActionSource, &mut stdout)?
    };

    for line in render::render_lines(&state) {
        println!("{}", line);
    }
    let headline = match end {
        SessionEnd::Won => "You win!",
        SessionEnd::Lost => "Game over.",
        SessionEnd::Quit => "Quit.",
    };
    println!(
        "{} Moves: {}, highest tile: {}, seed: {}",
        headline,
        state.moves_made(),
        state.highest_tile(),
        rng.seed()
    );
    log!("Session ended: {:?}", end);

    Ok(())
}
