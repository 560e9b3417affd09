//! Failure capture for chains: run a fallible closure against an optional
//! value and reify the three possible results into one inspectable type.
//!
//! The unguarded combinators in [`maybe`](crate::maybe) add null-safety only;
//! a closure's failure propagates. [`TryExt`] is the guarded tier: the
//! closure reports failure through `Result`, and that `Err` is captured at
//! exactly one boundary into an [`Outcome`] instead of propagating. The
//! caller then decides what a captured failure means: surface it as a side
//! effect with [`Outcome::handle`] or drop it explicitly with
//! [`Outcome::ignore`]. There is no implicit default.
//!
//! # Example
//!
//! ```rust
//! use shallows::{Outcome, TryExt};
//!
//! fn parse(s: &str) -> Result<i32, std::num::ParseIntError> {
//!     s.parse()
//! }
//!
//! let mut log = Vec::new();
//!
//! let parsed = Some("17").try_with(parse).handle(|e| log.push(e.to_string()));
//! assert_eq!(parsed, Some(17));
//! assert!(log.is_empty());
//!
//! let parsed = Some("seventeen").try_with(parse).handle(|e| log.push(e.to_string()));
//! assert_eq!(parsed, None);
//! assert_eq!(log.len(), 1);
//! ```
//!
//! Panics are not part of this contract: a closure that panics unwinds
//! through `try_with`/`try_tap` like through any other call. The `Result`
//! returned by the closure is the only captured failure channel.

/// The result of running a fallible operation against an optional value.
///
/// Exactly three states are reachable, and the tags keep them structurally
/// distinct, so a consumer can always tell which case occurred:
///
/// - [`Skipped`](Outcome::Skipped): the input was absent, the operation
///   never ran.
/// - [`Completed`](Outcome::Completed): the operation ran and succeeded.
/// - [`Faulted`](Outcome::Faulted): the operation ran and failed. For the
///   action form ([`try_tap`](TryExt::try_tap)) the `value` slot preserves
///   the original input, since the action may have been partially applied
///   and callers often still need the reference; for the transform form
///   ([`try_with`](TryExt::try_with)) it is `None` because no valid result
///   exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// The input was absent; the operation never ran.
    Skipped,
    /// The operation ran and succeeded.
    Completed(T),
    /// The operation ran and failed.
    Faulted {
        /// The original input for the action form, `None` for the transform
        /// form.
        value: Option<T>,
        /// The failure reported by the closure.
        error: E,
    },
}

impl<T, E> Outcome<T, E> {
    // ========== Constructors ==========

    /// An outcome for an absent input.
    #[inline]
    pub fn skipped() -> Self {
        Outcome::Skipped
    }

    /// An outcome for a successful run.
    #[inline]
    pub fn completed(value: T) -> Self {
        Outcome::Completed(value)
    }

    /// An outcome for a failed run.
    #[inline]
    pub fn faulted(value: Option<T>, error: E) -> Self {
        Outcome::Faulted { value, error }
    }

    // ========== Predicates ==========

    /// True when the input was absent and nothing ran.
    #[inline]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped)
    }

    /// True when the operation ran and succeeded.
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    /// True when the operation ran and failed.
    #[inline]
    pub fn is_faulted(&self) -> bool {
        matches!(self, Outcome::Faulted { .. })
    }

    // ========== Accessors ==========

    /// The value slot: `Some` for `Completed`, the preserved input (if any)
    /// for `Faulted`, `None` for `Skipped`.
    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Skipped => None,
            Outcome::Completed(value) => Some(value),
            Outcome::Faulted { value, .. } => value,
        }
    }

    /// The error slot: `Some` only for `Faulted`.
    pub fn error(self) -> Option<E> {
        match self {
            Outcome::Faulted { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Borrow the value slot without consuming the outcome.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Outcome::Skipped => None,
            Outcome::Completed(value) => Some(value),
            Outcome::Faulted { value, .. } => value.as_ref(),
        }
    }

    /// Borrow the error slot without consuming the outcome.
    pub fn as_error(&self) -> Option<&E> {
        match self {
            Outcome::Faulted { error, .. } => Some(error),
            _ => None,
        }
    }

    // ========== Consumers ==========

    /// Surface a captured failure as a side effect, then keep chaining.
    ///
    /// When the outcome is faulted, `log` is invoked with the error; the
    /// value slot is returned in every case, so the chain continues exactly
    /// as it would have without the failure capture.
    ///
    /// The logger is expected not to fail. If it panics anyway, the panic
    /// propagates to the caller; this library neither catches nor swallows
    /// it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::Outcome;
    ///
    /// let mut errors = Vec::new();
    ///
    /// let ok: Outcome<i32, String> = Outcome::completed(5);
    /// assert_eq!(ok.handle(|e| errors.push(e.clone())), Some(5));
    /// assert!(errors.is_empty());
    ///
    /// let bad: Outcome<i32, String> = Outcome::faulted(None, "boom".to_string());
    /// assert_eq!(bad.handle(|e| errors.push(e.clone())), None);
    /// assert_eq!(errors, vec!["boom".to_string()]);
    /// ```
    pub fn handle<F>(self, log: F) -> Option<T>
    where
        F: FnOnce(&E),
    {
        match self {
            Outcome::Skipped => None,
            Outcome::Completed(value) => Some(value),
            Outcome::Faulted { value, error } => {
                log(&error);
                value
            }
        }
    }

    /// Like [`handle`](Outcome::handle), but the logger also receives the
    /// preserved value slot, useful when the log line should identify
    /// which input failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::Outcome;
    ///
    /// let bad: Outcome<&str, String> = Outcome::faulted(Some("user-41"), "stale".to_string());
    /// let mut line = String::new();
    ///
    /// let out = bad.handle_with(|error, value| {
    ///     line = format!("{error}: {value:?}");
    /// });
    ///
    /// assert_eq!(out, Some("user-41"));
    /// assert_eq!(line, "stale: Some(\"user-41\")");
    /// ```
    pub fn handle_with<F>(self, log: F) -> Option<T>
    where
        F: FnOnce(&E, Option<&T>),
    {
        match self {
            Outcome::Skipped => None,
            Outcome::Completed(value) => Some(value),
            Outcome::Faulted { value, error } => {
                log(&error, value.as_ref());
                value
            }
        }
    }

    /// Return the value slot, discarding any captured error silently.
    ///
    /// An explicit, greppable opt-in to swallowing failures: the reviewer
    /// sees `ignore()` at the call site instead of a missing check.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::Outcome;
    ///
    /// let bad: Outcome<i32, String> = Outcome::faulted(Some(3), "late".to_string());
    /// assert_eq!(bad.ignore(), Some(3));
    /// ```
    pub fn ignore(self) -> Option<T> {
        self.value()
    }

    /// Bridge into ordinary `Result` handling: a captured failure becomes
    /// `Err`, and the two ran-or-skipped success states collapse into
    /// `Ok(Option<T>)`.
    ///
    /// Note the faulted value slot is dropped here; use
    /// [`handle_with`](Outcome::handle_with) first when it matters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::Outcome;
    ///
    /// let ok: Outcome<i32, String> = Outcome::completed(5);
    /// assert_eq!(ok.into_result(), Ok(Some(5)));
    ///
    /// let skipped: Outcome<i32, String> = Outcome::skipped();
    /// assert_eq!(skipped.into_result(), Ok(None));
    ///
    /// let bad: Outcome<i32, String> = Outcome::faulted(None, "boom".to_string());
    /// assert_eq!(bad.into_result(), Err("boom".to_string()));
    /// ```
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self {
            Outcome::Skipped => Ok(None),
            Outcome::Completed(value) => Ok(Some(value)),
            Outcome::Faulted { error, .. } => Err(error),
        }
    }
}

#[cfg(feature = "tracing")]
impl<T, E> Outcome<T, E>
where
    E: std::fmt::Display,
{
    /// [`handle`](Outcome::handle) wired to [`tracing`]: a captured failure
    /// is emitted at `ERROR` level, and the value slot is returned.
    ///
    /// Only available with the `tracing` feature.
    pub fn logged(self) -> Option<T> {
        self.handle(|error| tracing::error!(%error, "captured failure"))
    }
}

/// Extension trait attaching the failure-capturing combinators to [`Option`].
pub trait TryExt<T>: Sized {
    /// Run a fallible action against the value, capturing its failure.
    ///
    /// - absent input → [`Outcome::Skipped`], `action` never runs;
    /// - `action` returns `Ok` → [`Outcome::Completed`] with the original
    ///   value;
    /// - `action` returns `Err` → [`Outcome::Faulted`] with the original
    ///   value preserved alongside the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::{Outcome, TryExt};
    ///
    /// fn flaky(msg: &&str) -> Result<(), String> {
    ///     if msg.len() > 3 { Err("too long".to_string()) } else { Ok(()) }
    /// }
    ///
    /// assert_eq!(Some("hi").try_tap(flaky), Outcome::completed("hi"));
    /// assert_eq!(
    ///     Some("hello").try_tap(flaky),
    ///     Outcome::faulted(Some("hello"), "too long".to_string()),
    /// );
    ///
    /// let missing: Option<&str> = None;
    /// assert_eq!(missing.try_tap(flaky), Outcome::skipped());
    /// ```
    fn try_tap<E, F>(self, action: F) -> Outcome<T, E>
    where
        F: FnOnce(&T) -> Result<(), E>;

    /// Run a fallible projection over the value, capturing its failure.
    ///
    /// - absent input → [`Outcome::Skipped`], `project` never runs;
    /// - `project` returns `Ok(result)` → [`Outcome::Completed`] with the
    ///   result;
    /// - `project` returns `Err` → [`Outcome::Faulted`] with an empty value
    ///   slot, since no valid result exists.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::{Outcome, TryExt};
    ///
    /// let parsed = Some("12").try_with(|s| s.parse::<i32>());
    /// assert_eq!(parsed, Outcome::completed(12));
    ///
    /// let parsed = Some("twelve").try_with(|s| s.parse::<i32>());
    /// assert!(parsed.is_faulted());
    /// assert_eq!(parsed.as_value(), None);
    /// ```
    fn try_with<U, E, F>(self, project: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Result<U, E>;
}

impl<T> TryExt<T> for Option<T> {
    fn try_tap<E, F>(self, action: F) -> Outcome<T, E>
    where
        F: FnOnce(&T) -> Result<(), E>,
    {
        match self {
            None => Outcome::Skipped,
            Some(value) => match action(&value) {
                Ok(()) => Outcome::Completed(value),
                Err(error) => Outcome::Faulted {
                    value: Some(value),
                    error,
                },
            },
        }
    }

    fn try_with<U, E, F>(self, project: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            None => Outcome::Skipped,
            Some(value) => match project(value) {
                Ok(result) => Outcome::Completed(result),
                Err(error) => Outcome::Faulted { value: None, error },
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Probe;

    fn reject(_: &i32) -> Result<(), String> {
        Err("rejected".to_string())
    }

    #[test]
    fn try_tap_skips_on_absent_input() {
        let probe = Probe::new();
        let out: Outcome<i32, String> = None.try_tap(|_| {
            probe.touch();
            Ok(())
        });
        assert_eq!(out, Outcome::skipped());
        probe.assert_not_called();
    }

    #[test]
    fn try_tap_completes_with_original_value() {
        let out: Outcome<i32, String> = Some(5).try_tap(|_| Ok(()));
        assert_eq!(out, Outcome::completed(5));
    }

    #[test]
    fn try_tap_preserves_value_on_failure() {
        let out = Some(5).try_tap(reject);
        assert_eq!(out, Outcome::faulted(Some(5), "rejected".to_string()));
    }

    #[test]
    fn try_with_skips_on_absent_input() {
        let probe = Probe::new();
        let missing: Option<i32> = None;
        let out: Outcome<i32, String> = missing.try_with(|n| {
            probe.touch();
            Ok(n * 2)
        });
        assert_eq!(out, Outcome::skipped());
        probe.assert_not_called();
    }

    #[test]
    fn try_with_completes_with_projected_value() {
        let out: Outcome<i32, String> = Some(5).try_with(|n| Ok(n * 2));
        assert_eq!(out, Outcome::completed(10));
    }

    #[test]
    fn try_with_leaves_value_slot_empty_on_failure() {
        let out: Outcome<i32, String> = Some(5).try_with(|_| Err("bad".to_string()));
        assert_eq!(out, Outcome::faulted(None, "bad".to_string()));
        assert_eq!(out.as_value(), None);
    }

    #[test]
    fn three_states_are_distinguishable() {
        let skipped: Outcome<i32, String> = Outcome::skipped();
        let completed: Outcome<i32, String> = Outcome::completed(1);
        let faulted: Outcome<i32, String> = Outcome::faulted(None, "e".to_string());

        assert!(skipped.is_skipped() && !skipped.is_completed() && !skipped.is_faulted());
        assert!(completed.is_completed() && !completed.is_skipped() && !completed.is_faulted());
        assert!(faulted.is_faulted() && !faulted.is_skipped() && !faulted.is_completed());
    }

    #[test]
    fn handle_returns_value_slot_without_firing_on_success() {
        let probe = Probe::new();
        let out: Outcome<i32, String> = Outcome::completed(5);
        assert_eq!(out.handle(|_| probe.touch()), Some(5));
        probe.assert_not_called();
    }

    #[test]
    fn handle_fires_once_on_failure_and_still_returns_value_slot() {
        let probe = Probe::new();
        let out: Outcome<i32, String> = Outcome::faulted(Some(5), "boom".to_string());
        assert_eq!(out.handle(|_| probe.touch()), Some(5));
        probe.assert_called_times(1);
    }

    #[test]
    fn handle_on_skipped_returns_none_without_firing() {
        let probe = Probe::new();
        let out: Outcome<i32, String> = Outcome::skipped();
        assert_eq!(out.handle(|_| probe.touch()), None);
        probe.assert_not_called();
    }

    #[test]
    fn handle_with_passes_error_and_preserved_value() {
        let mut captured = None;
        let out: Outcome<i32, String> = Outcome::faulted(Some(5), "boom".to_string());
        let value = out.handle_with(|error, value| {
            captured = Some((error.clone(), value.copied()));
        });
        assert_eq!(value, Some(5));
        assert_eq!(captured, Some(("boom".to_string(), Some(5))));
    }

    #[test]
    fn ignore_drops_error_silently() {
        let out: Outcome<i32, String> = Outcome::faulted(Some(5), "boom".to_string());
        assert_eq!(out.ignore(), Some(5));

        let out: Outcome<i32, String> = Outcome::faulted(None, "boom".to_string());
        assert_eq!(out.ignore(), None);
    }

    #[test]
    fn into_result_maps_the_three_states() {
        let completed: Outcome<i32, String> = Outcome::completed(1);
        assert_eq!(completed.into_result(), Ok(Some(1)));

        let skipped: Outcome<i32, String> = Outcome::skipped();
        assert_eq!(skipped.into_result(), Ok(None));

        let faulted: Outcome<i32, String> = Outcome::faulted(Some(1), "e".to_string());
        assert_eq!(faulted.into_result(), Err("e".to_string()));
    }

    #[test]
    fn accessors_borrow_both_slots() {
        let out: Outcome<i32, String> = Outcome::faulted(Some(3), "e".to_string());
        assert_eq!(out.as_value(), Some(&3));
        assert_eq!(out.as_error(), Some(&"e".to_string()));
        assert_eq!(out.clone().value(), Some(3));
        assert_eq!(out.error(), Some("e".to_string()));
    }
}
