//! Structural unification of terms.

use crate::core::substitution::Substitution;
use crate::core::term::Term;

/// Attempt to unify `u` and `v` under `s`.
///
/// Returns the extended substitution or `None` if the terms
/// cannot be made equal.
pub fn unify(u: &Term, v: &Term, s: Substitution) -> Option<Substitution> {
    s.unify(u, v)
}

impl Substitution {
    /// Attempt to unify terms `u` and `v` under this substitution.
    ///
    /// Sequences unify element-wise and only with sequences of the
    /// same length. There is no occurs check.
    pub fn unify(self, u: &Term, v: &Term) -> Option<Self> {
        let u = self.walk(u).clone();
        let v = self.walk(v).clone();

        match (&u, &v) {
            (Term::Var(a), Term::Var(b)) if a == b => Some(self),
            // walk only stops at unbound variables, so extending cannot clash
            (Term::Var(a), _) => self.extend(*a, v).ok(),
            (_, Term::Var(b)) => self.extend(*b, u).ok(),
            (Term::Seq(us), Term::Seq(vs)) => {
                if us.len() != vs.len() {
                    return None;
                }
                us.iter()
                    .zip(vs.iter())
                    .try_fold(self, |s, (x, y)| s.unify(x, y))
            }
            (Term::Atom(a), Term::Atom(b)) if a == b => Some(self),
            _ => None,
        }
    }
}
