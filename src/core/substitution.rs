//! Substitutions map variables to terms.
//!
//! A substitution is a persistent value: extending it yields a new
//! substitution and leaves every earlier version untouched, so each
//! branch of a search can keep growing its own view of the bindings.
//! It also carries the counter used to allocate fresh variables.

use crate::core::logic_variable::Var;
use crate::core::term::Term;
use crate::error::BindError;
use im::OrdMap;
use std::fmt::Formatter;

/// Mapping of variables to terms.
#[derive(Clone, PartialEq)]
pub struct Substitution {
    bindings: OrdMap<Var, Term>,
    next_id: usize,
}

impl Default for Substitution {
    fn default() -> Self {
        Self::empty()
    }
}

impl Substitution {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Substitution {
            bindings: OrdMap::new(),
            next_id: 0,
        }
    }

    /// Get number of bound variables
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Id the next fresh variable will receive.
    pub fn next_id(&self) -> usize {
        self.next_id
    }

    /// Allocate a new variable.
    ///
    /// This is the only source of variable ids; they increase
    /// strictly along any chain of substitutions.
    pub fn fresh(mut self, name: &'static str) -> (Var, Self) {
        let var = Var::new(self.next_id, name);
        self.next_id += 1;
        (var, self)
    }

    /// Extend substitution with a variable => term mapping.
    ///
    /// Re-binding a variable that already has a binding is rejected.
    /// No occurs check is performed; binding `x` to a term that
    /// contains `x` makes later calls to [`Substitution::resolve`]
    /// diverge.
    pub fn extend(mut self, x: Var, t: Term) -> Result<Self, BindError> {
        if self.bindings.contains_key(&x) {
            return Err(BindError::AlreadyBound {
                name: x.name(),
                id: x.id(),
            });
        }
        self.bindings.insert(x, t);
        Ok(self)
    }

    /// Direct binding of `x`, without following chains.
    pub fn get(&self, x: &Var) -> Option<&Term> {
        self.bindings.get(x)
    }

    /// Follow variable bindings until reaching an unbound variable
    /// or a non-variable term.
    ///
    /// Sequences are returned as they are; their elements are not
    /// substituted.
    pub fn walk<'a>(&'a self, mut t: &'a Term) -> &'a Term {
        while let Term::Var(var) = t {
            match self.bindings.get(var) {
                Some(next) => t = next,
                None => break,
            }
        }
        t
    }

    /// Replace all variables contained in `t` with their bound terms,
    /// recursing into sequences.
    ///
    /// Variables without a binding remain in the result.
    pub fn resolve(&self, t: &Term) -> Term {
        match self.walk(t) {
            Term::Seq(items) => Term::Seq(items.iter().map(|item| self.resolve(item)).collect()),
            other => other.clone(),
        }
    }

    /// Deeply resolved value of a variable.
    pub fn resolve_var(&self, x: &Var) -> Term {
        self.resolve(&Term::Var(*x))
    }

    /// All bindings, in increasing variable id order.
    ///
    /// The terms are the raw bindings; use [`Substitution::resolve`]
    /// to substitute the variables they contain.
    pub fn bindings(&self) -> impl Iterator<Item = (&Var, &Term)> {
        self.bindings.iter()
    }
}

impl std::fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.bindings.iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {:?}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {:?}", var, val)?;
        }
        write!(f, "}}")
    }
}
