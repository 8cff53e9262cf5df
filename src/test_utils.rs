use crate::search::problems::{Puzzle, SlidingTiles, Tile};

/// 8-puzzles paired with the cost of their optimal solutions.
pub const EIGHT_PUZZLES: [(&[Tile], usize); 5] = [
    (&[1, 2, 3, 4, 5, 6, 0, 7, 8], 2),
    (&[4, 1, 3, 2, 6, 8, 7, 5, 0], 8),
    (&[7, 1, 6, 3, 0, 4, 5, 8, 2], 16),
    (&[3, 1, 6, 5, 8, 7, 0, 2, 4], 22),
    (&[4, 2, 1, 6, 0, 5, 3, 8, 7], 24),
];

/// A 15-puzzle paired with the cost of its optimal solution.
pub const FIFTEEN_PUZZLE: (&[Tile], usize) = (
    &[1, 2, 3, 4, 5, 7, 10, 8, 9, 6, 12, 15, 13, 14, 11, 0],
    8,
);

/// A 2x2 puzzle with two tiles swapped. None of its 12 reachable states is
/// the goal.
pub const UNSOLVABLE_FOUR_PUZZLE: &[Tile] = &[2, 1, 3, 0];

pub fn sliding_tiles(tiles: &[Tile]) -> SlidingTiles {
    let initial_state = Puzzle::from_tiles(tiles).unwrap();
    let goal_state = Puzzle::solved(initial_state.width()).unwrap();
    SlidingTiles::new(initial_state, goal_state).unwrap()
}
