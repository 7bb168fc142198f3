use rollcraft_core::{CELL_COUNT, Coord2, coords_of_index};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command {0:?}, type `help` for a list")]
    Unknown(String),
    #[error("Cell position must be 1-{max}, got {0:?}", max = CELL_COUNT)]
    InvalidPosition(String),
    #[error("`reveal` needs a cell position")]
    MissingPosition,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Reveal the cell at a grid position.
    Reveal(Coord2),
    Claim,
    Dismiss,
    NewRound,
    Help,
    Quit,
    /// Blank line, redraw.
    Redraw,
}

pub const HELP: &str = "\
commands:
  <1-9> | reveal <1-9>   reveal the cell at that grid position
  claim                  show the round summary
  ok                     dismiss the summary (after a bomb this deals a new board)
  new                    start a new round
  help                   show this text
  quit                   leave";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(Self::Redraw);
        };

        Ok(match word.to_ascii_lowercase().as_str() {
            "reveal" | "r" => {
                let position = words.next().ok_or(CommandError::MissingPosition)?;
                Self::Reveal(parse_position(position)?)
            }
            "claim" | "c" => Self::Claim,
            "ok" | "close" | "dismiss" => Self::Dismiss,
            "new" | "n" => Self::NewRound,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other if other.starts_with(|c: char| c.is_ascii_digit()) => {
                Self::Reveal(parse_position(other)?)
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        })
    }
}

/// Maps a 1-based reading-order position to grid coordinates.
fn parse_position(text: &str) -> Result<Coord2, CommandError> {
    match text.parse::<usize>() {
        Ok(position) if (1..=CELL_COUNT).contains(&position) => {
            Ok(coords_of_index(position - 1))
        }
        _ => Err(CommandError::InvalidPosition(text.to_string())),
    }
}
