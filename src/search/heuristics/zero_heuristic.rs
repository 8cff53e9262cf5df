use crate::search::{Heuristic, HeuristicValue, SearchError, SearchProblem};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<P: SearchProblem> Heuristic<P> for ZeroHeuristic {
    fn evaluate(&mut self, _state: &P::State, _problem: &P) -> Result<HeuristicValue, SearchError> {
        Ok((0.).into())
    }
}
