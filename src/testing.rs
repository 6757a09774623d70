use crate::core::goal::Goal;
use crate::core::term::Term;

/// Route `tracing` output to the test harness; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Assert that a goal fails
pub fn fails(goal: Goal) {
    assert!(goal.run(1).is_empty());
}

/// Assert that a goal succeeds at least once
pub fn succeeds(goal: Goal) {
    assert!(!goal.run(1).is_empty());
}

pub fn has_unique_solution(mut solutions: impl Iterator<Item = Term>, expected: Term) {
    assert_eq!(solutions.next(), Some(expected));
    assert_eq!(solutions.next(), None);
}
