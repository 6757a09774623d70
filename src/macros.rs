//! Variadic forms of the binary goal combinators

/// Creates a goal that succeeds if any of its subgoals succeeds
#[macro_export]
macro_rules! disj {
    () => { $crate::prelude::fail() };
    ($g:expr $(;)?) => { $g };
    ($g0:expr; $($g:expr);+ $(;)?) => { $crate::prelude::disj($g0, $crate::disj!($($g);+)) };
}

/// Creates a goal that succeeds if all of its subgoals succeed
#[macro_export]
macro_rules! conj {
    () => { $crate::prelude::succeed() };
    ($g:expr $(,)?) => { $g };
    ($g0:expr, $($g:expr),+ $(,)?) => { $crate::prelude::conj($g0, $crate::conj!($($g),+)) };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn macros_nest_to_the_right() {
        let answers = query_n(10, "x", |x| {
            disj!(eq(x, 1); eq(x, 2); eq(x, 3))
        });
        assert_eq!(answers, vec![Term::from(1), 2.into(), 3.into()]);

        let answers = query_n(10, "x", |x| {
            conj!(eq(x, 1), disj!(eq(x, 1); eq(x, 2)), succeed())
        });
        assert_eq!(answers, vec![Term::from(1)]);
    }

    #[test]
    fn empty_macros_are_identities() {
        assert_eq!(conj!().run_all().len(), 1);
        assert!(disj!().run_all().is_empty());
    }
}
