//! Library of goals

pub mod combinators;
pub mod primitive;
