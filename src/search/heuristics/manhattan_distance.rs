use crate::search::{
    problems::{Puzzle, SlidingTiles},
    Heuristic, HeuristicValue, SearchError,
};

/// Sum of the Manhattan distances between every tile and its position in the
/// goal state, not counting the blank. A move shifts exactly one tile by one
/// step, so this never overestimates and is consistent.
#[derive(Clone, Debug, Default)]
pub struct ManhattanDistance;

impl ManhattanDistance {
    pub fn new() -> Self {
        ManhattanDistance {}
    }
}

impl Heuristic<SlidingTiles> for ManhattanDistance {
    fn evaluate(
        &mut self,
        state: &Puzzle,
        problem: &SlidingTiles,
    ) -> Result<HeuristicValue, SearchError> {
        let distance = problem.manhattan_distance_heuristic(state)?;
        Ok((distance as f64).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;
    use crate::search::problems::Tile;

    #[test]
    fn manhattan_distance() {
        let solved = Puzzle::solved(3).unwrap();
        let problem = SlidingTiles::new(solved.clone(), solved).unwrap();
        let mut heuristic = ManhattanDistance::new();
        let mut h = |tiles: &[Tile]| {
            heuristic
                .evaluate(&Puzzle::from_tiles(tiles).unwrap(), &problem)
                .unwrap()
        };
        assert_eq!(h(&[1, 2, 3, 4, 5, 6, 7, 0, 8]), OrderedFloat(1.0));
        assert_eq!(h(&[7, 2, 4, 5, 0, 6, 8, 3, 1]), OrderedFloat(14.0));
    }

    #[test]
    fn non_canonical_goal() {
        let goal = Puzzle::from_tiles(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let problem = SlidingTiles::new(Puzzle::solved(3).unwrap(), goal.clone()).unwrap();
        let mut heuristic = ManhattanDistance::new();
        assert_eq!(heuristic.evaluate(&goal, &problem), Ok(OrderedFloat(0.0)));
        assert_eq!(
            heuristic.evaluate(&Puzzle::solved(3).unwrap(), &problem),
            Ok(OrderedFloat(12.0))
        );
    }
}
