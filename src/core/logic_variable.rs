use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Named logic variable.
///
/// The variable name is purely descriptive to help understanding.
/// Identity is carried by the id alone, which is handed out by
/// [`Substitution::fresh`](crate::core::substitution::Substitution::fresh)
/// in strictly increasing order. Two variables with the same name
/// are different unless their ids match.
#[derive(Copy, Clone)]
pub struct Var {
    id: usize,
    name: &'static str,
}

impl Var {
    pub(crate) fn new(id: usize, name: &'static str) -> Self {
        Var { id, name }
    }

    /// Return the variable's id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Return the variable's name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Var {}

impl Hash for Var {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl PartialOrd for Var {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Var {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn variables_keep_their_name() {
        let var = Var::new(0, "x");
        assert_eq!(var.name(), "x");
        assert_eq!(var.id(), 0);
    }

    #[test]
    fn copied_variables_are_equal() {
        let var_a = Var::new(3, "x");
        let var_b = var_a;
        assert_eq!(var_a, var_b);
    }

    #[test]
    fn two_variables_with_same_name_are_not_equal() {
        let var_a = Var::new(0, "x");
        let var_b = Var::new(1, "x");
        assert_ne!(var_a, var_b);
    }

    #[test]
    fn identity_ignores_the_name() {
        assert_eq!(Var::new(7, "x"), Var::new(7, "y"));
    }

    #[test]
    fn variables_are_ordered_by_id() {
        assert!(Var::new(1, "z") < Var::new(2, "a"));
    }

    #[test]
    fn debug_shows_name_and_id() {
        assert_eq!(format!("{:?}", Var::new(4, "q")), "q#4");
    }
}
