use crate::search::heuristics::{ManhattanDistance, MisplacedTiles, ZeroHeuristic};
use crate::search::problems::SlidingTiles;
use crate::search::{SearchError, SearchProblem};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

/// An estimate of the cost of reaching a goal from a state.
///
/// The problem is passed in on every call instead of being captured when the
/// heuristic is created, so a heuristic is always evaluated against the
/// problem that is actually being searched.
pub trait Heuristic<P: SearchProblem>: Debug {
    /// Evaluate the given state with respect to the given problem.
    fn evaluate(&mut self, state: &P::State, problem: &P) -> Result<HeuristicValue, SearchError>;

    /// Evaluate a batch of states with respect to the given problem. The
    /// default implementation simply calls `evaluate` for each state
    /// sequentially and stops at the first error.
    fn evaluate_batch(
        &mut self,
        states: &[P::State],
        problem: &P,
    ) -> Result<Vec<HeuristicValue>, SearchError> {
        states
            .iter()
            .map(|state| self.evaluate(state, problem))
            .collect()
    }
}

impl<P, H> Heuristic<P> for Box<H>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    fn evaluate(&mut self, state: &P::State, problem: &P) -> Result<HeuristicValue, SearchError> {
        self.as_mut().evaluate(state, problem)
    }

    fn evaluate_batch(
        &mut self,
        states: &[P::State],
        problem: &P,
    ) -> Result<Vec<HeuristicValue>, SearchError> {
        self.as_mut().evaluate_batch(states, problem)
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "Sum of the distances of all tiles to their goal positions.")]
    Manhattan,
    #[clap(help = "Number of tiles that are not in their goal position.")]
    MisplacedTiles,
    #[clap(help = "The zero heuristic, turns A* into uniform cost search.")]
    Zero,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic<SlidingTiles>> {
        match self {
            HeuristicName::Manhattan => Box::new(ManhattanDistance::new()),
            HeuristicName::MisplacedTiles => Box::new(MisplacedTiles::new()),
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::problems::Puzzle;

    #[test]
    fn created_heuristics_match_problem_methods() {
        let problem = SlidingTiles::new(
            Puzzle::from_tiles(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap(),
            Puzzle::solved(3).unwrap(),
        )
        .unwrap();
        let state = problem.initial_state().clone();

        let mut manhattan = HeuristicName::Manhattan.create();
        let mut misplaced = HeuristicName::MisplacedTiles.create();
        let mut zero = HeuristicName::Zero.create();

        assert_eq!(manhattan.evaluate(&state, &problem), Ok(OrderedFloat(12.0)));
        assert_eq!(misplaced.evaluate(&state, &problem), Ok(OrderedFloat(8.0)));
        assert_eq!(zero.evaluate(&state, &problem), Ok(OrderedFloat(0.0)));
    }

    #[test]
    fn evaluate_batch_matches_evaluate() {
        let solved = Puzzle::solved(3).unwrap();
        let problem = SlidingTiles::new(solved.clone(), solved).unwrap();
        let states = [
            Puzzle::from_tiles(&[1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap(),
            Puzzle::from_tiles(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap(),
            Puzzle::solved(3).unwrap(),
        ];
        let mut heuristic = HeuristicName::Manhattan.create();
        assert_eq!(
            heuristic.evaluate_batch(&states, &problem),
            Ok(vec![OrderedFloat(1.0), OrderedFloat(12.0), OrderedFloat(0.0)])
        );

        let without_goal = SlidingTiles::without_goal(Puzzle::solved(3).unwrap());
        assert_eq!(
            heuristic.evaluate_batch(&states, &without_goal),
            Err(SearchError::MissingGoalState)
        );
    }
}
