//! Chaining combinators for single optional values.
//!
//! Every combinator here embeds the presence check itself, so a chain of
//! dependent lookups reads top-to-bottom without interleaved `if let` or
//! `match` scaffolding. `None` short-circuits: the supplied closure is never
//! invoked on an absent value.
//!
//! # Example
//!
//! ```rust
//! use shallows::MaybeExt;
//!
//! struct Address { city: Option<String> }
//! struct Person { address: Option<Address> }
//!
//! let person = Some(Person {
//!     address: Some(Address { city: Some("Oslo".to_string()) }),
//! });
//!
//! let city = person
//!     .with(|p| p.address).flatten()
//!     .with(|a| a.city).flatten()
//!     .recover("unknown".to_string());
//!
//! assert_eq!(city, "Oslo");
//! ```
//!
//! # Error handling tiers
//!
//! All combinators in this module are **unguarded**: they add null-safety
//! only. A closure that panics propagates exactly as if it had been called
//! inline. For capturing a fallible closure's error instead, see
//! [`TryExt`](crate::outcome::TryExt).

/// Extension trait attaching the chaining combinators to [`Option`].
///
/// The methods consume the option and hand the contained value (or a
/// reference to it, for predicates and actions) to a caller-supplied closure.
/// A `None` receiver short-circuits without invoking the closure.
pub trait MaybeExt<T>: Sized {
    /// Keep the value only when `predicate` holds.
    ///
    /// Returns the input unchanged when it is present and `predicate`
    /// returns `true`; `None` otherwise. The predicate is never invoked on
    /// an absent value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::MaybeExt;
    ///
    /// assert_eq!(Some(4).when(|n| n % 2 == 0), Some(4));
    /// assert_eq!(Some(3).when(|n| n % 2 == 0), None);
    /// assert_eq!(None.when(|n: &i32| n % 2 == 0), None);
    /// ```
    fn when<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool;

    /// Keep the value only when `predicate` does *not* hold.
    ///
    /// Dual of [`when`](MaybeExt::when): for any present value exactly one
    /// of `when` / `unless` returns it and the other returns `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::MaybeExt;
    ///
    /// assert_eq!(Some(3).unless(|n| n % 2 == 0), Some(3));
    /// assert_eq!(Some(4).unless(|n| n % 2 == 0), None);
    /// ```
    fn unless<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool;

    /// Project the value through `project`, short-circuiting on `None`.
    ///
    /// This is the workhorse of a lookup chain: each link extracts the next
    /// value, and the first absent link makes the rest of the chain a no-op.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::MaybeExt;
    ///
    /// assert_eq!(Some("ada").with(|s| s.len()), Some(3));
    ///
    /// let missing: Option<&str> = None;
    /// assert_eq!(missing.with(|s| s.len()), None);
    /// ```
    fn with<U, F>(self, project: F) -> Option<U>
    where
        F: FnOnce(T) -> U;

    /// Project the value, yielding `fallback` when the input is absent.
    ///
    /// Unlike [`with`](MaybeExt::with) this leaves optional territory: the
    /// result is always a plain value. The fallback is evaluated eagerly; it
    /// should be a cheap literal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::MaybeExt;
    ///
    /// assert_eq!(Some("ada").with_or(|s| s.len(), 0), 3);
    ///
    /// let missing: Option<&str> = None;
    /// assert_eq!(missing.with_or(|s| s.len(), 0), 0);
    /// ```
    fn with_or<U, F>(self, project: F, fallback: U) -> U
    where
        F: FnOnce(T) -> U;

    /// Behavioral twin of [`with_or`](MaybeExt::with_or), named for call
    /// sites that read as a binding ("let the display name be …") rather
    /// than a projection. There is no semantic difference.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::MaybeExt;
    ///
    /// let nickname = Some("grace");
    /// let display = nickname.let_or(|n| n.to_uppercase(), "anonymous".to_string());
    /// assert_eq!(display, "GRACE");
    /// ```
    fn let_or<U, F>(self, project: F, fallback: U) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.with_or(project, fallback)
    }

    /// Return the value if present, otherwise the literal `fallback`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::MaybeExt;
    ///
    /// assert_eq!(Some(7).recover(0), 7);
    /// assert_eq!(None.recover(0), 0);
    /// ```
    fn recover(self, fallback: T) -> T;

    /// Return the value if present, otherwise invoke `supplier` for one.
    ///
    /// The lazy form: `supplier` must not run when the value is present.
    /// Use it when computing the fallback is expensive or has side effects.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::MaybeExt;
    ///
    /// // The supplier is not evaluated for a present value.
    /// let v = Some(7).recover_with(|| unreachable!("value was present"));
    /// assert_eq!(v, 7);
    ///
    /// assert_eq!(None.recover_with(|| 42), 42);
    /// ```
    fn recover_with<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T;

    /// Run `action` for its side effect, passing the value through unchanged.
    ///
    /// The identity passthrough keeps the chain flowing: logging, metrics,
    /// or cache warming can be spliced between two lookups without
    /// disturbing them. `action` never runs on `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::MaybeExt;
    ///
    /// let mut seen = Vec::new();
    /// let out = Some("hello").tap(|s| seen.push(s.len()));
    ///
    /// assert_eq!(out, Some("hello"));
    /// assert_eq!(seen, vec![5]);
    /// ```
    fn tap<F>(self, action: F) -> Option<T>
    where
        F: FnOnce(&T);

    /// Run `action` only when the value is present *and* `predicate` holds;
    /// the input passes through unchanged either way.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::MaybeExt;
    ///
    /// let mut warnings = 0;
    /// let out = Some(99).tap_if(|n| *n > 50, |_| warnings += 1);
    ///
    /// assert_eq!(out, Some(99));
    /// assert_eq!(warnings, 1);
    /// ```
    fn tap_if<P, F>(self, predicate: P, action: F) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T);
}

impl<T> MaybeExt<T> for Option<T> {
    fn when<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Some(value) if predicate(&value) => Some(value),
            _ => None,
        }
    }

    fn unless<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Some(value) if !predicate(&value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn with<U, F>(self, project: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Some(value) => Some(project(value)),
            None => None,
        }
    }

    fn with_or<U, F>(self, project: F, fallback: U) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Some(value) => project(value),
            None => fallback,
        }
    }

    #[inline]
    fn recover(self, fallback: T) -> T {
        match self {
            Some(value) => value,
            None => fallback,
        }
    }

    fn recover_with<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Some(value) => value,
            None => supplier(),
        }
    }

    fn tap<F>(self, action: F) -> Option<T>
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self {
            action(value);
        }
        self
    }

    fn tap_if<P, F>(self, predicate: P, action: F) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T),
    {
        if let Some(value) = &self {
            if predicate(value) {
                action(value);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Probe;

    #[test]
    fn when_keeps_matching_value() {
        assert_eq!(Some(10).when(|n| *n > 5), Some(10));
    }

    #[test]
    fn when_drops_non_matching_value() {
        assert_eq!(Some(2).when(|n| *n > 5), None);
    }

    #[test]
    fn when_never_invokes_predicate_on_none() {
        let probe = Probe::new();
        let out = None.when(|_: &i32| {
            probe.touch();
            true
        });
        assert_eq!(out, None);
        probe.assert_not_called();
    }

    #[test]
    fn unless_is_the_dual_of_when() {
        for n in [1, 2, 3, 4, 5] {
            let kept_by_when = Some(n).when(|n| n % 2 == 0);
            let kept_by_unless = Some(n).unless(|n| n % 2 == 0);
            // Exactly one side keeps the value.
            assert!(kept_by_when.is_some() != kept_by_unless.is_some());
            assert_eq!(kept_by_when.or(kept_by_unless), Some(n));
        }
    }

    #[test]
    fn with_projects_present_value() {
        assert_eq!(Some("abc").with(|s| s.len()), Some(3));
    }

    #[test]
    fn with_short_circuits_without_invoking_projection() {
        let probe = Probe::new();
        let missing: Option<&str> = None;
        let out = missing.with(|s| {
            probe.touch();
            s.len()
        });
        assert_eq!(out, None);
        probe.assert_not_called();
    }

    #[test]
    fn with_or_yields_fallback_without_invoking_projection() {
        let probe = Probe::new();
        let missing: Option<&str> = None;
        let out = missing.with_or(
            |s| {
                probe.touch();
                s.len()
            },
            99,
        );
        assert_eq!(out, 99);
        probe.assert_not_called();
    }

    #[test]
    fn with_or_projects_present_value() {
        assert_eq!(Some("abc").with_or(|s| s.len(), 99), 3);
    }

    #[test]
    fn let_or_matches_with_or() {
        assert_eq!(Some(6).let_or(|n| n * 2, 0), Some(6).with_or(|n| n * 2, 0));

        let probe = Probe::new();
        let missing: Option<i32> = None;
        let out = missing.let_or(
            |n| {
                probe.touch();
                n * 2
            },
            -1,
        );
        assert_eq!(out, -1);
        probe.assert_not_called();
    }

    #[test]
    fn recover_prefers_present_value() {
        assert_eq!(Some(1).recover(9), 1);
        assert_eq!(None.recover(9), 9);
    }

    #[test]
    fn recover_with_is_lazy() {
        let out = Some(1).recover_with(|| panic!("supplier must not run"));
        assert_eq!(out, 1);
    }

    #[test]
    fn recover_with_supplies_on_none() {
        assert_eq!(None.recover_with(|| 5), 5);
    }

    #[test]
    fn tap_passes_value_through_and_runs_once() {
        let probe = Probe::new();
        let out = Some("x").tap(|_| probe.touch());
        assert_eq!(out, Some("x"));
        probe.assert_called_times(1);
    }

    #[test]
    fn tap_skips_action_on_none() {
        let probe = Probe::new();
        let out: Option<i32> = None.tap(|_| probe.touch());
        assert_eq!(out, None);
        probe.assert_not_called();
    }

    #[test]
    fn tap_if_runs_action_only_when_predicate_holds() {
        let probe = Probe::new();

        let out = Some(10).tap_if(|n| *n > 5, |_| probe.touch());
        assert_eq!(out, Some(10));
        probe.assert_called_times(1);

        let out = Some(2).tap_if(|n| *n > 5, |_| probe.touch());
        assert_eq!(out, Some(2));
        probe.assert_called_times(1);
    }

    #[test]
    fn tap_if_skips_both_closures_on_none() {
        let probe = Probe::new();
        let out: Option<i32> = None.tap_if(
            |_| {
                probe.touch();
                true
            },
            |_| probe.touch(),
        );
        assert_eq!(out, None);
        probe.assert_not_called();
    }
}
