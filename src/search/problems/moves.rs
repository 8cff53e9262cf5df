use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A move of the blank tile. Moving the blank in a direction swaps it with
/// the tile next to it in that direction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Move {
    #[strum(to_string = "U", serialize = "up")]
    Up,
    #[strum(to_string = "D", serialize = "down")]
    Down,
    #[strum(to_string = "L", serialize = "left")]
    Left,
    #[strum(to_string = "R", serialize = "right")]
    Right,
}

impl Move {
    /// The move that undoes this one.
    pub fn opposite(self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Change of the blank's index on a board of width `n`.
    pub fn offset(self, n: usize) -> isize {
        match self {
            Move::Up => -(n as isize),
            Move::Down => n as isize,
            Move::Left => -1,
            Move::Right => 1,
        }
    }
}
