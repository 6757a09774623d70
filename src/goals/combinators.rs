//! Compose goals using combinators to build more complex goals
//!

use crate::core::goal::Goal;
use crate::core::stream::Stream;
use crate::goals::primitive::{fail, succeed};
use std::sync::Arc;

/// Creates a goal that succeeds if either of its subgoals succeeds.
///
/// Both subgoals start from the same substitution and their answers
/// are interleaved fairly.
pub fn disj(g1: Goal, g2: Goal) -> Goal {
    Goal::new(move |s| g1.apply(s.clone()).mplus(g2.apply(s)))
}

/// Creates a goal that succeeds if both of its subgoals succeed.
///
/// `g2` runs on every answer of `g1` as soon as it appears, so an
/// infinite `g1` does not hold `g2` back.
pub fn conj(g1: Goal, g2: Goal) -> Goal {
    Goal::new(move |s| {
        let g2 = g2.clone();
        g1.apply(s).bind(move |s| g2.apply(s))
    })
}

/// Delay construction and evaluation of a goal until the search
/// forces it.
///
/// Recursive relations must go through `defer`; otherwise building
/// or applying the goal recurses on the native stack.
pub fn defer(f: impl 'static + Fn() -> Goal + Send + Sync) -> Goal {
    let f = Arc::new(f);
    Goal::new(move |s| {
        let f = f.clone();
        Stream::suspended(move || (*f)().apply(s))
    })
}

/// Conjunction of any number of goals; succeeds once if there are none.
pub fn conj_all(goals: impl IntoIterator<Item = Goal>) -> Goal {
    let goals: Vec<Goal> = goals.into_iter().collect();
    goals
        .into_iter()
        .rev()
        .reduce(|rest, g| conj(g, rest))
        .unwrap_or_else(succeed)
}

/// Disjunction of any number of goals; fails if there are none.
pub fn disj_all(goals: impl IntoIterator<Item = Goal>) -> Goal {
    let goals: Vec<Goal> = goals.into_iter().collect();
    goals
        .into_iter()
        .rev()
        .reduce(|rest, g| disj(g, rest))
        .unwrap_or_else(fail)
}

/// Succeeds infinitely often without binding anything.
pub fn alwayso() -> Goal {
    defer(|| disj(succeed(), alwayso()))
}

/// Never succeeds and never finishes.
pub fn nevero() -> Goal {
    defer(nevero)
}
