//! Ordered first-match rule lists.
//!
//! # Responsibility
//! - Represent a priority cascade as data: `(name, guard, fragment)` rows
//!   evaluated top to bottom over lowercased text.
//!
//! # Invariants
//! - Evaluation stops at the first guard that returns `true`; later guards
//!   are never called.
//! - Rule names are unique within one list.

/// One row of a priority cascade.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Stable rule name used in logs and tests.
    pub name: &'static str,
    pub guard: fn(&str) -> bool,
    pub fragment: &'static str,
}

impl Rule {
    pub const fn new(name: &'static str, guard: fn(&str) -> bool, fragment: &'static str) -> Self {
        Self {
            name,
            guard,
            fragment,
        }
    }

    pub fn matches(&self, lowered: &str) -> bool {
        (self.guard)(lowered)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Returns the first rule whose guard accepts `lowered`.
pub fn first_match<'r>(rules: &'r [Rule], lowered: &str) -> Option<&'r Rule> {
    rules.iter().find(|rule| rule.matches(lowered))
}

/// True when `text` contains any of `needles`.
pub(crate) fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}
