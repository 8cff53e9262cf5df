use crate::search::{
    problems::{Puzzle, SlidingTiles},
    Heuristic, HeuristicValue, SearchError,
};

/// Counts the tiles that are not where the goal state has them, not counting
/// the blank. Every misplaced tile needs at least one move, so this never
/// overestimates.
#[derive(Clone, Debug, Default)]
pub struct MisplacedTiles;

impl MisplacedTiles {
    pub fn new() -> Self {
        MisplacedTiles {}
    }
}

impl Heuristic<SlidingTiles> for MisplacedTiles {
    fn evaluate(
        &mut self,
        state: &Puzzle,
        problem: &SlidingTiles,
    ) -> Result<HeuristicValue, SearchError> {
        let misplaced = problem.misplaced_tiles_heuristic(state)?;
        Ok((misplaced as f64).into())
    }
}
