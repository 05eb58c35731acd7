mod input;

pub use input::{
    parse_player_command, parse_puzzle_command, read_line, InputError, PlayerCommand,
    PuzzleCommand,
};
