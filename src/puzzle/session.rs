use std::fmt::Write;
use std::io::BufRead;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use termion::{clear, cursor};

use crate::input_handler::{parse_puzzle_command, InputError, PuzzleCommand};

use super::{PuzzleError, SlidingPuzzle};

/// An interactive puzzle: reads tile numbers from `reader` and redraws the
/// grid after every command.
pub struct PuzzleSession<R: BufRead> {
    puzzle: SlidingPuzzle,
    reader: R,
    rng: StdRng,
    buffer: String,
}

impl<R: BufRead> PuzzleSession<R> {
    pub fn new(size: usize, reader: R) -> Result<Self, PuzzleError> {
        Self::with_rng(size, reader, StdRng::from_entropy())
    }

    pub fn with_rng(size: usize, reader: R, mut rng: StdRng) -> Result<Self, PuzzleError> {
        let mut puzzle = SlidingPuzzle::solved(size)?;
        puzzle.shuffle(&mut rng);

        Ok(Self {
            puzzle,
            reader,
            rng,
            buffer: String::with_capacity(512),
        })
    }

    pub fn puzzle(&self) -> &SlidingPuzzle {
        &self.puzzle
    }

    pub fn frame(&self) -> &str {
        &self.buffer
    }

    pub fn run(&mut self) -> Result<(), InputError> {
        let mut message: Option<String> = None;

        loop {
            self.draw(message.take());
            print!("{}", self.buffer);

            let command = match parse_puzzle_command(&mut self.reader) {
                Ok(command) => command,
                Err(InputError::UserExit) => return Ok(()),
                Err(error @ InputError::IOError { .. }) => return Err(error),
                Err(error) => {
                    message = Some(format!("error: {}", error));
                    continue;
                }
            };

            match command {
                PuzzleCommand::Slide { tile } => {
                    if self.puzzle.is_solved() {
                        message = Some("Already solved.".to_string());
                        continue;
                    }
                    if let Err(error) = self.puzzle.slide(tile) {
                        message = Some(format!("error: {}", error));
                    } else if self.puzzle.is_solved() {
                        info!("Puzzle solved in {} moves", self.puzzle.move_count());
                    }
                }
                PuzzleCommand::Shuffle => self.puzzle.shuffle(&mut self.rng),
                PuzzleCommand::Quit => return Ok(()),
            }
        }
    }

    fn draw(&mut self, message: Option<String>) {
        self.buffer.clear();
        let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
        let _ = writeln!(self.buffer, "{}", self.puzzle);
        let _ = writeln!(self.buffer, "Moves: {}", self.puzzle.move_count());

        if let Some(message) = message {
            let _ = writeln!(self.buffer, "{}", message);
        }

        if self.puzzle.is_solved() {
            let _ = writeln!(
                self.buffer,
                "Solved in {} moves! Type `shuffle` to play again or `quit` to leave:",
                self.puzzle.move_count()
            );
        } else {
            let _ = writeln!(self.buffer, "Enter a tile next to the blank:");
        }
    }
}
