use crate::search::{HeuristicValue, Plan, SearchError, SearchProblem};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("step {step}: action {action} is not applicable in state {state}")]
    InapplicableAction {
        step: usize,
        action: String,
        state: String,
    },
    #[error("plan does not reach the goal, final state is {state}")]
    GoalNotReached { state: String },
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Replay `plan` from the initial state of `problem` and check that it ends
/// in a goal state. Returns the cost of the plan.
pub fn validate<P: SearchProblem>(
    plan: &Plan<P::Action>,
    problem: &P,
) -> Result<HeuristicValue, ValidationError> {
    let mut cur_state = problem.initial_state().clone();
    let mut cost = HeuristicValue::from(0.);
    for (step, action) in plan.iter().enumerate() {
        let next_state = match problem.action_result(&cur_state, action) {
            Ok(next_state) => next_state,
            Err(SearchError::InvalidAction { .. }) => {
                return Err(ValidationError::InapplicableAction {
                    step,
                    action: format!("{:?}", action),
                    state: format!("{:?}", cur_state),
                })
            }
            Err(e) => return Err(e.into()),
        };
        cost += problem.action_cost(&cur_state, action, &next_state);
        cur_state = next_state;
    }

    if !problem.is_goal(&cur_state)? {
        return Err(ValidationError::GoalNotReached {
            state: format!("{:?}", cur_state),
        });
    }

    Ok(cost)
}
