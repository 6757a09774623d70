//! Core data structures and logic algorithms

pub mod driver;
pub mod goal;
pub mod logic_variable;
pub mod stream;
pub mod substitution;
pub mod term;
pub mod unify;
