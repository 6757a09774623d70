use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::stream::Stream;
use crate::core::term::Term;

/// Creates a goal that succeeds if `u` and `v` unify.
pub fn eq(u: impl Into<Term>, v: impl Into<Term>) -> Goal {
    let u = u.into();
    let v = v.into();
    Goal::new(move |s| match s.unify(&u, &v) {
        Some(s) => Stream::singleton(s),
        None => Stream::empty(),
    })
}

pub fn succeed() -> Goal {
    Goal::new(Stream::singleton)
}

pub fn fail() -> Goal {
    Goal::new(|_| Stream::empty())
}

/// Introduce a fresh variable and pass it to the goal constructor `f`.
pub fn fresh(name: &'static str, f: impl 'static + Fn(Var) -> Goal + Send + Sync) -> Goal {
    Goal::new(move |s| {
        let (x, s) = s.fresh(name);
        f(x).apply(s)
    })
}

pub fn fresh2(
    names: [&'static str; 2],
    f: impl 'static + Fn(Var, Var) -> Goal + Send + Sync,
) -> Goal {
    Goal::new(move |s| {
        let (x, s) = s.fresh(names[0]);
        let (y, s) = s.fresh(names[1]);
        f(x, y).apply(s)
    })
}

pub fn fresh3(
    names: [&'static str; 3],
    f: impl 'static + Fn(Var, Var, Var) -> Goal + Send + Sync,
) -> Goal {
    Goal::new(move |s| {
        let (x, s) = s.fresh(names[0]);
        let (y, s) = s.fresh(names[1]);
        let (z, s) = s.fresh(names[2]);
        f(x, y, z).apply(s)
    })
}

pub fn fresh4(
    names: [&'static str; 4],
    f: impl 'static + Fn(Var, Var, Var, Var) -> Goal + Send + Sync,
) -> Goal {
    Goal::new(move |s| {
        let (w, s) = s.fresh(names[0]);
        let (x, s) = s.fresh(names[1]);
        let (y, s) = s.fresh(names[2]);
        let (z, s) = s.fresh(names[3]);
        f(w, x, y, z).apply(s)
    })
}
