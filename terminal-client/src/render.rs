use std::io::{self, Write};

use common::games::puzzle2048::{GameStatus, Puzzle2048GameState};
use crossterm::cursor::MoveTo;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

const CELL_PADDING: usize = 2;

/// Inner width of every cell: wide enough for the target value or the
/// largest tile on the board, whichever is longer.
fn cell_width(state: &Puzzle2048GameState) -> usize {
    let longest = state.target_value().max(state.highest_tile());
    longest.to_string().len() + CELL_PADDING
}

fn border_line(size: usize, width: usize) -> String {
    let mut line = String::from("+");
    for _ in 0..size {
        line.push_str(&"-".repeat(width));
        line.push('+');
    }
    line
}

fn format_cell(value: u32, width: usize) -> String {
    if value == 0 {
        return " ".repeat(width);
    }
    format!("{:^width$}", value, width = width)
}

pub fn tile_colors(value: u32) -> (Color, Color) {
    match value {
        0 => (Color::Reset, Color::Reset),
        2 => (Color::Black, Color::White),
        4 => (Color::Black, Color::Grey),
        8 => (Color::White, Color::DarkYellow),
        16 => (Color::White, Color::Yellow),
        32 => (Color::White, Color::DarkRed),
        64 => (Color::White, Color::Red),
        128 => (Color::Black, Color::DarkGreen),
        256 => (Color::Black, Color::Green),
        512 => (Color::White, Color::DarkCyan),
        1024 => (Color::Black, Color::Cyan),
        2048 => (Color::White, Color::Magenta),
        _ => (Color::White, Color::DarkMagenta),
    }
}

pub fn status_line(state: &Puzzle2048GameState) -> String {
    format!(
        "Moves: {}  Highest: {}  Target: {}",
        state.moves_made(),
        state.highest_tile(),
        state.target_value()
    )
}

pub fn footer_line(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "Arrow keys or WASD to move, q to quit",
        GameStatus::Won => "You win! Press any key to exit",
        GameStatus::Lost => "Game over! Press any key to exit",
    }
}

/// Plain-text board with its status line, one string per terminal row.
pub fn render_lines(state: &Puzzle2048GameState) -> Vec<String> {
    let width = cell_width(state);
    let border = border_line(state.size(), width);

    let mut lines = vec![status_line(state), border.clone()];
    for row in state.snapshot() {
        let mut line = String::from("|");
        for value in row {
            line.push_str(&format_cell(value, width));
            line.push('|');
        }
        lines.push(line);
        lines.push(border.clone());
    }
    lines
}

/// Queues a full coloured frame and flushes it.
pub fn draw<W: Write>(out: &mut W, state: &Puzzle2048GameState) -> io::Result<()> {
    let width = cell_width(state);
    let border = border_line(state.size(), width);

    queue!(out, Clear(ClearType::All), MoveTo(0, 0), Print(status_line(state)))?;

    let mut y: u16 = 1;
    queue!(out, MoveTo(0, y), Print(&border))?;
    for row in state.snapshot() {
        y += 1;
        queue!(out, MoveTo(0, y), Print("|"))?;
        for value in row {
            let (fg, bg) = tile_colors(value);
            queue!(
                out,
                SetForegroundColor(fg),
                SetBackgroundColor(bg),
                SetAttribute(Attribute::Bold),
                Print(format_cell(value, width)),
                SetAttribute(Attribute::Reset),
                ResetColor,
                Print("|")
            )?;
        }
        y += 1;
        queue!(out, MoveTo(0, y), Print(&border))?;
    }

    y += 1;
    queue!(out, MoveTo(0, y), Print(footer_line(state.status())))?;
    out.flush()
}
