//! Conditional Resolver
//!
//! A generic ordered pattern-matcher over tuples of discrete values. Call
//! sites branch on several independent axes at once — process type and
//! actor role, say — without nesting matches:
//!
//! ```rust
//! use process_conditional::{Cond, ConditionalResolver};
//! use Cond::{Any, Is};
//!
//! let banner = ConditionalResolver::new(vec!["purchase", "provider"])
//!     .cond(vec![Is("purchase"), Is("customer")], || "You bought this")
//!     .cond(vec![Is("purchase"), Any], || "Purchase in progress")
//!     .default(|| "Transaction in progress")
//!     .resolve();
//!
//! assert_eq!(banner, Some("Purchase in progress"));
//! ```
//!
//! # Semantics
//!
//! - Candidates are evaluated in **registration order**; the first match
//!   wins no matter how many later candidates would also match.
//! - A pattern matches iff it has the same length as the input tuple and
//!   every position is either [`Cond::Any`] or equal to the input value.
//!   Shorter or longer patterns never match — there is no prefix matching.
//! - `default` is the fallback of last resort, applied only when no
//!   candidate matched; where in the chain it was registered is irrelevant.
//! - Result factories are `FnOnce` and only the winning factory runs.
//! - [`ConditionalResolver::resolve`] consumes the resolver, so it is
//!   necessarily the terminal call of a chain.

#![deny(unsafe_code)]

/// One position of a condition pattern: an exact value or the wildcard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond<T> {
    /// Matches any input value at this position
    Any,
    /// Matches exactly this value
    Is(T),
}

impl<T: PartialEq> Cond<T> {
    fn matches(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Is(expected) => expected == value,
        }
    }
}

impl<T> From<T> for Cond<T> {
    fn from(value: T) -> Self {
        Self::Is(value)
    }
}

struct Candidate<'a, T, R> {
    pattern: Vec<Cond<T>>,
    factory: Box<dyn FnOnce() -> R + 'a>,
}

/// Ordered first-match-wins resolver over an input tuple
pub struct ConditionalResolver<'a, T, R> {
    input: Vec<T>,
    candidates: Vec<Candidate<'a, T, R>>,
    fallback: Option<Box<dyn FnOnce() -> R + 'a>>,
}

impl<'a, T: PartialEq, R> ConditionalResolver<'a, T, R> {
    /// Create a resolver for the given input tuple
    pub fn new(input: Vec<T>) -> Self {
        Self {
            input,
            candidates: Vec::new(),
            fallback: None,
        }
    }

    /// Register a candidate: a positional pattern and its result factory
    pub fn cond(mut self, pattern: Vec<Cond<T>>, factory: impl FnOnce() -> R + 'a) -> Self {
        self.candidates.push(Candidate {
            pattern,
            factory: Box::new(factory),
        });
        self
    }

    /// Register the fallback of last resort
    ///
    /// Position in the chain does not affect precedence; a later call
    /// replaces an earlier one.
    pub fn default(mut self, factory: impl FnOnce() -> R + 'a) -> Self {
        self.fallback = Some(Box::new(factory));
        self
    }

    /// Evaluate candidates in registration order and produce the first
    /// match's result, the fallback's result, or `None`.
    pub fn resolve(self) -> Option<R> {
        let input = self.input;
        for candidate in self.candidates {
            let matched = candidate.pattern.len() == input.len()
                && candidate
                    .pattern
                    .iter()
                    .zip(&input)
                    .all(|(cond, value)| cond.matches(value));
            if matched {
                return Some((candidate.factory)());
            }
        }
        self.fallback.map(|factory| factory())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use Cond::{Any, Is};

    #[test]
    fn test_exact_match_wins_over_later_wildcard() {
        let result = ConditionalResolver::new(vec!["inquiry", "customer"])
            .cond(vec![Is("inquiry"), Is("customer")], || 1)
            .cond(vec![Is("purchase"), Any], || 2)
            .default(|| 3)
            .resolve();
        assert_eq!(result, Some(1));
    }

    #[test]
    fn test_wildcard_matches_after_specific_non_match() {
        let result = ConditionalResolver::new(vec!["purchase", "provider"])
            .cond(vec![Is("purchase"), Is("customer")], || 1)
            .cond(vec![Is("purchase"), Any], || 2)
            .resolve();
        assert_eq!(result, Some(2));
    }

    #[test]
    fn test_registration_order_wins_among_multiple_matches() {
        let result = ConditionalResolver::new(vec!["booking", "operator"])
            .cond(vec![Any, Any], || "first")
            .cond(vec![Is("booking"), Is("operator")], || "second")
            .resolve();
        assert_eq!(result, Some("first"));
    }

    #[test]
    fn test_default_position_is_irrelevant() {
        let early = ConditionalResolver::new(vec!["inquiry", "customer"])
            .default(|| 0)
            .cond(vec![Is("inquiry"), Is("customer")], || 1)
            .resolve();
        let late = ConditionalResolver::new(vec!["inquiry", "customer"])
            .cond(vec![Is("inquiry"), Is("customer")], || 1)
            .default(|| 0)
            .resolve();
        assert_eq!(early, Some(1));
        assert_eq!(late, Some(1));
    }

    #[test]
    fn test_shorter_pattern_never_matches() {
        let result = ConditionalResolver::new(vec!["inquiry", "customer"])
            .cond(vec![Is("inquiry")], || 1)
            .default(|| 2)
            .resolve();
        assert_eq!(result, Some(2));
    }

    #[test]
    fn test_empty_pattern_never_matches_nonempty_input() {
        let result = ConditionalResolver::new(vec!["inquiry", "customer"])
            .cond(vec![], || 1)
            .default(|| 2)
            .resolve();
        assert_eq!(result, Some(2));
    }

    #[test]
    fn test_longer_pattern_never_matches() {
        let result = ConditionalResolver::new(vec!["inquiry"])
            .cond(vec![Is("inquiry"), Any], || 1)
            .default(|| 2)
            .resolve();
        assert_eq!(result, Some(2));
    }

    #[test]
    fn test_no_match_and_no_default_is_none() {
        let result: Option<i32> = ConditionalResolver::new(vec!["inquiry"])
            .cond(vec![Is("purchase")], || 1)
            .resolve();
        assert_eq!(result, None);
    }

    #[test]
    fn test_all_wildcards_match_anything() {
        let result = ConditionalResolver::new(vec!["anything", "at-all"])
            .cond(vec![Any, Any], || true)
            .resolve();
        assert_eq!(result, Some(true));
    }

    #[test]
    fn test_later_default_replaces_earlier() {
        let result: Option<i32> = ConditionalResolver::new(vec!["x"])
            .default(|| 1)
            .default(|| 2)
            .resolve();
        assert_eq!(result, Some(2));
    }

    #[test]
    fn test_only_winning_factory_runs() {
        let calls = Cell::new(0);
        let result = ConditionalResolver::new(vec!["purchase"])
            .cond(vec![Is("purchase")], || {
                calls.set(calls.get() + 1);
                "won"
            })
            .cond(vec![Any], || {
                calls.set(calls.get() + 100);
                "also matches"
            })
            .default(|| {
                calls.set(calls.get() + 100);
                "fallback"
            })
            .resolve();

        assert_eq!(result, Some("won"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_works_with_non_string_axes() {
        #[derive(PartialEq)]
        enum Role {
            Customer,
            Provider,
        }

        let result = ConditionalResolver::new(vec![Role::Provider])
            .cond(vec![Is(Role::Customer)], || "buy")
            .cond(vec![Is(Role::Provider)], || "sell")
            .resolve();
        assert_eq!(result, Some("sell"));
    }
}
