//! A microKanren search engine.
//!
//! Goals are functions from a [`Substitution`](crate::core::substitution::Substitution)
//! to a lazy [`Stream`](crate::core::stream::Stream) of substitutions that satisfy
//! them. They are built from a handful of primitives: [`eq`](goals::primitive::eq),
//! [`fresh`](goals::primitive::fresh), [`conj`](goals::combinators::conj),
//! [`disj`](goals::combinators::disj) and [`defer`](goals::combinators::defer).
//! Disjunction and conjunction interleave their branches fairly, so
//! a goal with an infinite branch still reaches the answers of the
//! other branches.
//!
//! ```
//! use micro_kanren::prelude::*;
//!
//! fn fives(x: Var) -> Goal {
//!     disj(eq(x, 5), defer(move || fives(x)))
//! }
//!
//! fn sixes(x: Var) -> Goal {
//!     disj(eq(6, x), defer(move || sixes(x)))
//! }
//!
//! let answers = query_n(2, "x", |x| disj(fives(x), sixes(x)));
//! assert_eq!(answers, vec![Term::from(5), Term::from(6)]);
//! ```

#[macro_use]
pub mod macros;
pub mod core;
pub mod error;
pub mod goals;
pub mod prelude;

#[cfg(test)]
mod testing;

use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::substitution::Substitution;
use crate::core::term::Term;

/// Run the goal built by `f` around a fresh query variable and yield
/// the resolved value of that variable for every answer.
///
/// The iterator is lazy and may be infinite. Parts of the value that
/// remain unbound show up as variables.
pub fn query(name: &'static str, f: impl FnOnce(Var) -> Goal) -> impl Iterator<Item = Term> {
    let (q, s) = Substitution::empty().fresh(name);
    f(q).apply(s).into_iter().map(move |s| s.resolve_var(&q))
}

/// At most `n` results of [`query`].
pub fn query_n(n: usize, name: &'static str, f: impl FnOnce(Var) -> Goal) -> Vec<Term> {
    query(name, f).take(n).collect()
}
