pub use crate::{
    core::{
        driver::{Driver, DriverConfig},
        goal::Goal,
        logic_variable::Var,
        stream::Stream,
        substitution::Substitution,
        term::{Atom, Term},
        unify::unify,
    },
    error::{BindError, SearchError},
    goals::{combinators::*, primitive::*},
    query, query_n,
};
