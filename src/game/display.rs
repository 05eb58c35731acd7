use std::fmt::Write;

use common::Square;
use termion::{clear, cursor};

use crate::board::color::Color;
use crate::board::piece::Piece;

use super::game::Game;
use super::state::GamePhase;

/// How many history entries are shown under the board.
const HISTORY_LINES: usize = 10;

/// Renders a game to the terminal. Every frame is built in a buffer first
/// and printed in one go.
pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer
            .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
    }

    /// Board with the selected square in parentheses and its destinations in
    /// brackets, followed by the status panel and an optional message.
    pub fn render_game_state(&mut self, game: &Game, message: Option<&str>) {
        self.clear();
        self.draw_game_state(game, message);
        print!("{}", self.buffer);
    }

    pub fn frame(&self) -> &str {
        &self.buffer
    }

    fn draw_game_state(&mut self, game: &Game, message: Option<&str>) {
        let selected = match game.phase() {
            GamePhase::WaitingForPlayerDestination { from } => Some(from),
            _ => None,
        };
        let destinations = selected
            .map(|from| game.legal_destinations(from))
            .unwrap_or_default();
        let last_move = game.last_move();

        self.buffer.push_str("    a   b   c   d   e   f   g   h\n");
        self.buffer
            .push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in 0..8u8 {
            let rank = 8 - row;
            self.buffer.push_str(&format!("{} │", rank));
            for col in 0..8u8 {
                let square = Square::new(row, col);
                let piece_str = match game.board().get(square) {
                    Some((piece, color)) => piece.to_unicode_piece_char(color).to_string(),
                    None if last_move.map_or(false, |m| m.from_square() == square) => {
                        "∙".to_string()
                    }
                    None => if (row + col) % 2 == 0 { " " } else { "·" }.to_string(),
                };

                let (open, close) = if selected == Some(square) {
                    ('(', ')')
                } else if destinations.contains(&square) {
                    ('[', ']')
                } else {
                    (' ', ' ')
                };
                self.buffer
                    .push_str(&format!("{}{}{}│", open, piece_str, close));
            }
            self.buffer.push_str(&format!(" {}\n", rank));

            if row < 7 {
                self.buffer
                    .push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            } else {
                self.buffer
                    .push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
            }
        }

        self.buffer
            .push_str("    a   b   c   d   e   f   g   h\n\n");

        self.draw_status(game);

        if let Some(message) = message {
            let _ = writeln!(self.buffer, "\n{}", message);
        }
    }

    fn draw_status(&mut self, game: &Game) {
        let buffer = &mut self.buffer;

        if game.is_over() {
            let _ = writeln!(buffer, "Game over: {}", game.result());
        } else if game.phase() == GamePhase::ComputerThinking {
            let _ = writeln!(buffer, "Turn: {} (thinking...)", game.turn());
        } else {
            let _ = writeln!(buffer, "Turn: {}", game.turn());
        }

        if let Some(last_move) = game.last_move() {
            let _ = writeln!(buffer, "Last move: {}", last_move.describe());
        }

        let elapsed = game.elapsed().as_secs();
        let _ = writeln!(
            buffer,
            "Moves: {}  Time: {:02}:{:02}  Difficulty: {}",
            game.move_count(),
            elapsed / 60,
            elapsed % 60,
            game.difficulty()
        );

        for color in [Color::White, Color::Black] {
            let _ = writeln!(
                buffer,
                "{}: {} pieces, lost {}",
                color,
                game.piece_count(color),
                captured_pieces(&game.captured(color), color)
            );
        }

        let history = game.history();
        if !history.is_empty() {
            let _ = writeln!(buffer, "\nHistory:");
            let skip = history.len().saturating_sub(HISTORY_LINES);
            for (i, entry) in history.iter().enumerate().skip(skip) {
                let _ = writeln!(buffer, "{:>3}. {}", i + 1, entry);
            }
        }
    }
}

fn captured_pieces(pieces: &[Piece], color: Color) -> String {
    if pieces.is_empty() {
        return "-".to_string();
    }

    pieces
        .iter()
        .map(|piece| piece.to_unicode_piece_char(color))
        .collect()
}
