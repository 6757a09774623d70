//! Terms are the values logic variables can be bound to.
//!
//! A term is either a variable, an atomic value, or a sequence of
//! terms. Sequences nest, which is enough to encode pairs, lists
//! and other composite data.

use crate::core::logic_variable::Var;
use std::fmt::{Debug, Formatter, Result};
use std::sync::Arc;

/// Opaque atomic value, compared structurally.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    Unit,
    Bool(bool),
    Int(i64),
    Char(char),
    Str(Arc<str>),
}

impl Debug for Atom {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Atom::Unit => write!(f, "()"),
            Atom::Bool(b) => write!(f, "{}", b),
            Atom::Int(i) => write!(f, "{}", i),
            Atom::Char(c) => write!(f, "{:?}", c),
            Atom::Str(s) => write!(f, "{:?}", s),
        }
    }
}

#[derive(Clone, PartialEq)]
pub enum Term {
    Var(Var),
    Atom(Atom),
    Seq(Arc<[Term]>),
}

impl Term {
    pub fn new(val: impl Into<Term>) -> Self {
        val.into()
    }

    pub fn var(v: Var) -> Self {
        Term::Var(v)
    }

    /// Build a sequence from anything that converts to terms.
    pub fn seq<T: Into<Term>>(items: impl IntoIterator<Item = T>) -> Self {
        Term::Seq(items.into_iter().map(Into::into).collect())
    }

    pub fn unit() -> Self {
        Term::Atom(Atom::Unit)
    }

    pub fn try_as_var(&self) -> Option<Var> {
        match self {
            Term::Var(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Term::Atom(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Term]> {
        match self {
            Term::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_var(&self) -> bool {
        self.try_as_var().is_some()
    }
}

impl Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Term::Var(v) => write!(f, "{:?}", v),
            Term::Atom(a) => write!(f, "{:?}", a),
            Term::Seq(items) => {
                write!(f, "[")?;
                let mut iter = items.iter();
                if let Some(first) = iter.next() {
                    write!(f, "{:?}", first)?;
                }
                for item in iter {
                    write!(f, ", {:?}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<&Var> for Term {
    fn from(v: &Var) -> Self {
        Term::Var(*v)
    }
}

impl From<Atom> for Term {
    fn from(a: Atom) -> Self {
        Term::Atom(a)
    }
}

impl From<&Term> for Term {
    fn from(t: &Term) -> Self {
        t.clone()
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        Term::Seq(items.into())
    }
}

impl From<()> for Atom {
    fn from(_: ()) -> Self {
        Atom::Unit
    }
}

impl From<bool> for Atom {
    fn from(b: bool) -> Self {
        Atom::Bool(b)
    }
}

impl From<char> for Atom {
    fn from(c: char) -> Self {
        Atom::Char(c)
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Atom::Str(s.into())
    }
}

impl From<String> for Atom {
    fn from(s: String) -> Self {
        Atom::Str(s.into())
    }
}

macro_rules! integer_atoms {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Atom {
                fn from(i: $t) -> Self {
                    Atom::Int(i64::from(i))
                }
            }
        )*
    };
}

integer_atoms!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! atomic_terms {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Term {
                fn from(v: $t) -> Self {
                    Term::Atom(Atom::from(v))
                }
            }

            impl PartialEq<$t> for Term {
                fn eq(&self, other: &$t) -> bool {
                    match self {
                        Term::Atom(a) => *a == Atom::from(other.clone()),
                        _ => false,
                    }
                }
            }
        )*
    };
}

atomic_terms!((), bool, char, String, i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::Atom(Atom::from(s))
    }
}

impl PartialEq<&str> for Term {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Term::Atom(Atom::Str(s)) if &**s == *other)
    }
}

impl PartialEq<Var> for Term {
    fn eq(&self, v: &Var) -> bool {
        self.try_as_var().map(|sv| sv == *v).unwrap_or(false)
    }
}
