use crate::search::{
    problems::{Move, Puzzle, PuzzleError, BLANK_TILE},
    HeuristicValue, SearchError, SearchProblem,
};
use strum::IntoEnumIterator;

/// The sliding tiles problem, where the tiles of an `n`×`n` board have to be
/// moved into a goal configuration by repeatedly swapping the blank with one
/// of its neighbours. Every move costs 1.
#[derive(Debug, Clone)]
pub struct SlidingTiles {
    n: usize,
    initial_state: Puzzle,
    goal_state: Option<Puzzle>,
    /// Index of every tile in the goal state, indexed by tile.
    goal_positions: Option<Vec<usize>>,
}

impl SlidingTiles {
    pub fn new(initial_state: Puzzle, goal_state: Puzzle) -> Result<Self, PuzzleError> {
        if initial_state.len() != goal_state.len() {
            return Err(PuzzleError::SizeMismatch {
                initial: initial_state.len(),
                goal: goal_state.len(),
            });
        }

        let mut goal_positions = vec![0; goal_state.len()];
        for (index, &tile) in goal_state.tiles().iter().enumerate() {
            goal_positions[tile as usize] = index;
        }

        Ok(Self {
            n: initial_state.width(),
            initial_state,
            goal_state: Some(goal_state),
            goal_positions: Some(goal_positions),
        })
    }

    /// A problem without a goal state. Goal tests and heuristics fail with
    /// [`SearchError::MissingGoalState`] on such a problem.
    pub fn without_goal(initial_state: Puzzle) -> Self {
        Self {
            n: initial_state.width(),
            initial_state,
            goal_state: None,
            goal_positions: None,
        }
    }

    /// Whether the canonical solved board can be reached from `state`. This
    /// only depends on the state itself, so it can be used to validate
    /// boards before a problem is built from them.
    pub fn is_solvable(state: &Puzzle) -> bool {
        state.is_solvable()
    }

    fn check_size(&self, state: &Puzzle) -> Result<(), SearchError> {
        let expected = self.initial_state.len();
        if state.len() == expected {
            Ok(())
        } else {
            Err(SearchError::StateSizeMismatch {
                expected,
                found: state.len(),
            })
        }
    }

    fn is_legal(&self, blank_index: usize, action: Move) -> bool {
        let n = self.n;
        match action {
            Move::Up => blank_index >= n,
            Move::Down => blank_index < n * (n - 1),
            Move::Left => blank_index % n != 0,
            Move::Right => blank_index % n != n - 1,
        }
    }

    /// Number of non-blank tiles that are not in their goal position.
    pub fn misplaced_tiles_heuristic(&self, state: &Puzzle) -> Result<usize, SearchError> {
        let goal_state = self
            .goal_state
            .as_ref()
            .ok_or(SearchError::MissingGoalState)?;
        self.check_size(state)?;

        Ok(state
            .tiles()
            .iter()
            .zip(goal_state.tiles())
            .filter(|&(&tile, &goal_tile)| tile != BLANK_TILE && tile != goal_tile)
            .count())
    }

    /// Sum over all non-blank tiles of the number of rows and columns between
    /// the tile and its goal position.
    pub fn manhattan_distance_heuristic(&self, state: &Puzzle) -> Result<usize, SearchError> {
        let goal_positions = self
            .goal_positions
            .as_ref()
            .ok_or(SearchError::MissingGoalState)?;
        self.check_size(state)?;

        let n = self.n;
        Ok(state
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK_TILE)
            .map(|(index, &tile)| {
                let goal_index = goal_positions[tile as usize];
                (index / n).abs_diff(goal_index / n) + (index % n).abs_diff(goal_index % n)
            })
            .sum())
    }
}

impl SearchProblem for SlidingTiles {
    type State = Puzzle;
    type Action = Move;

    fn initial_state(&self) -> &Puzzle {
        &self.initial_state
    }

    fn goal_state(&self) -> Option<&Puzzle> {
        self.goal_state.as_ref()
    }

    /// A board of another size has no actions in this problem.
    fn actions(&self, state: &Puzzle) -> Vec<Move> {
        if self.check_size(state).is_err() {
            return vec![];
        }
        let blank_index = state.blank_index();
        Move::iter()
            .filter(|&action| self.is_legal(blank_index, action))
            .collect()
    }

    fn action_result(&self, state: &Puzzle, action: &Move) -> Result<Puzzle, SearchError> {
        self.check_size(state)?;
        let blank_index = state.blank_index();
        if !self.is_legal(blank_index, *action) {
            return Err(SearchError::InvalidAction {
                action: action.to_string(),
                state: format!("{:?}", state.tiles()),
            });
        }
        let neighbour_index = blank_index.wrapping_add_signed(action.offset(self.n));
        Ok(state.with_swapped(blank_index, neighbour_index))
    }

    fn action_cost(&self, _state: &Puzzle, _action: &Move, _result: &Puzzle) -> HeuristicValue {
        HeuristicValue::from(1.)
    }
}
