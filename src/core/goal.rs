use crate::core::driver::{Driver, DriverConfig};
use crate::core::stream::Stream;
use crate::core::substitution::Substitution;
use std::sync::Arc;

type GoalFn = dyn Fn(Substitution) -> Stream<Substitution> + Send + Sync;

/// A goal maps a substitution to the stream of its extensions that
/// satisfy it.
///
/// Goals are opaque and cheap to clone. They are built with the
/// combinators in [`crate::goals`] and composed, never inspected.
#[derive(Clone)]
pub struct Goal(Arc<GoalFn>);

impl Goal {
    pub fn new(f: impl 'static + Fn(Substitution) -> Stream<Substitution> + Send + Sync) -> Self {
        Goal(Arc::new(f))
    }

    pub fn apply(&self, s: Substitution) -> Stream<Substitution> {
        (self.0)(s)
    }

    /// Apply the goal to the empty substitution.
    pub fn solve(&self) -> Stream<Substitution> {
        self.apply(Substitution::empty())
    }

    pub fn iter(&self) -> Driver<Substitution> {
        Driver::new(self.solve())
    }

    pub fn iter_with(&self, config: DriverConfig) -> Driver<Substitution> {
        Driver::with_config(self.solve(), config)
    }

    /// At most `n` answers.
    pub fn run(&self, n: usize) -> Vec<Substitution> {
        self.iter().take(n).collect()
    }

    /// All answers. Never returns if there are infinitely many.
    pub fn run_all(&self) -> Vec<Substitution> {
        self.iter().collect()
    }
}

impl std::fmt::Debug for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Goal(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goals_are_plain_functions_of_a_substitution() {
        let g = Goal::new(|s| Stream::ready(s.clone(), Stream::singleton(s)));
        assert_eq!(g.solve().len(), Some(2));
        assert_eq!(g.run(1), vec![Substitution::empty()]);
        assert_eq!(g.run_all().len(), 2);
    }

    #[test]
    fn cloned_goals_share_behaviour() {
        let g = Goal::new(|_| Stream::empty());
        let h = g.clone();
        assert!(h.solve().is_empty());
        assert_eq!(format!("{:?}", h), "Goal(..)");
    }
}
