mod moves;
mod puzzle;
mod sliding_tiles;

pub use moves::Move;
pub use puzzle::{Puzzle, PuzzleError, Tile, BLANK_TILE, MAX_WIDTH};
pub use sliding_tiles::SlidingTiles;
