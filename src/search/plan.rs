//! A plan is a sequence of actions that can be executed to get from the
//! initial state of a problem to a goal. This module provides the [`Plan`]
//! struct, which represents a plan.

use itertools::Itertools;
use std::fmt::{self, Display};
use std::ops::Deref;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    steps: Vec<A>,
}

impl<A> Plan<A> {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<A>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[A] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<A: Display> Display for Plan<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join(" "))
    }
}

/// Parses whitespace or comma separated actions. Text without separators is
/// read one character per action, so `"RRU"` and `"R, R, U"` are the same
/// plan.
impl<A: FromStr> FromStr for Plan<A> {
    type Err = A::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        // A single token is either one action or a compact run of
        // one-character actions.
        let steps = match tokens.as_slice() {
            [token] => match token.parse() {
                Ok(step) => vec![step],
                Err(_) => token
                    .char_indices()
                    .map(|(i, c)| token[i..i + c.len_utf8()].parse())
                    .collect::<Result<Vec<A>, _>>()?,
            },
            _ => tokens
                .into_iter()
                .map(str::parse)
                .collect::<Result<Vec<A>, _>>()?,
        };

        Ok(Self { steps })
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::problems::Move;

    #[test]
    fn from_str_reads_compact_and_separated_text() {
        let compact: Plan<Move> = "RRU".parse().unwrap();
        let separated: Plan<Move> = "R, R U".parse().unwrap();

        assert_eq!(compact, separated);
        assert_eq!(compact.steps(), &[Move::Right, Move::Right, Move::Up]);
    }

    #[test]
    fn from_str_reads_a_single_named_action() {
        let plan: Plan<Move> = "up".parse().unwrap();
        assert_eq!(plan.steps(), &[Move::Up]);
    }

    #[test]
    fn from_str_rejects_unknown_actions() {
        assert!("RXU".parse::<Plan<Move>>().is_err());
    }

    #[test]
    fn empty_text_is_empty_plan() {
        let plan: Plan<Move> = "  ".parse().unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan, Plan::empty());
    }

    #[test]
    fn display_joins_steps() {
        let plan = Plan::new(vec![Move::Up, Move::Left, Move::Down]);
        assert_eq!(plan.to_string(), "U L D");
    }
}
