//! Testing utilities for code built on the chaining combinators.
//!
//! The short-circuit contract ("the closure is never invoked on an absent
//! value") is awkward to assert with plain closures. [`Probe`] records how
//! often a callback ran so tests can assert "never" or "exactly once"
//! directly. The assertion macros cover the three [`Outcome`](crate::Outcome)
//! states.
//!
//! # Examples
//!
//! ```rust
//! use shallows::MaybeExt;
//! use shallows::testing::Probe;
//!
//! let probe = Probe::new();
//! let missing: Option<i32> = None;
//!
//! let out = missing.with(|n| {
//!     probe.touch();
//!     n + 1
//! });
//! assert_eq!(out, None);
//!
//! probe.assert_not_called();
//! ```
//!
//! ```rust
//! use shallows::{Outcome, TryExt, assert_completed, assert_skipped};
//!
//! let out: Outcome<i32, String> = Some(4).try_with(|n| Ok(n * 2));
//! assert_completed!(out);
//!
//! let missing: Option<i32> = None;
//! let out: Outcome<i32, String> = missing.try_with(|n| Ok(n * 2));
//! assert_skipped!(out);
//! ```

use std::cell::Cell;

/// Records how many times a callback was invoked.
///
/// Interior mutability keeps the closure side `Fn`-compatible: the closure
/// captures `&Probe` and calls [`touch`](Probe::touch), and the test asserts
/// on the count afterwards.
#[derive(Debug, Default)]
pub struct Probe {
    calls: Cell<usize>,
}

impl Probe {
    /// Create a probe with a zero call count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation.
    pub fn touch(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// The number of invocations recorded so far.
    pub fn count(&self) -> usize {
        self.calls.get()
    }

    /// Panic unless the probe was never touched.
    #[track_caller]
    pub fn assert_not_called(&self) {
        assert_eq!(
            self.count(),
            0,
            "callback ran {} time(s), expected it never to run",
            self.count()
        );
    }

    /// Panic unless the probe was touched exactly `expected` times.
    #[track_caller]
    pub fn assert_called_times(&self, expected: usize) {
        assert_eq!(
            self.count(),
            expected,
            "callback ran {} time(s), expected {}",
            self.count(),
            expected
        );
    }
}

/// Assert that an outcome is `Completed`.
///
/// # Example
///
/// ```rust
/// use shallows::{Outcome, assert_completed};
///
/// let out: Outcome<i32, String> = Outcome::completed(42);
/// assert_completed!(out);
/// ```
#[macro_export]
macro_rules! assert_completed {
    ($outcome:expr) => {
        match &$outcome {
            $crate::Outcome::Completed(_) => {}
            other => panic!("Expected Completed, got {:?}", other),
        }
    };
}

/// Assert that an outcome is `Faulted`.
///
/// # Example
///
/// ```rust
/// use shallows::{Outcome, assert_faulted};
///
/// let out: Outcome<i32, String> = Outcome::faulted(None, "boom".to_string());
/// assert_faulted!(out);
/// ```
#[macro_export]
macro_rules! assert_faulted {
    ($outcome:expr) => {
        match &$outcome {
            $crate::Outcome::Faulted { .. } => {}
            other => panic!("Expected Faulted, got {:?}", other),
        }
    };
}

/// Assert that an outcome is `Skipped`.
///
/// # Example
///
/// ```rust
/// use shallows::{Outcome, assert_skipped};
///
/// let out: Outcome<i32, String> = Outcome::skipped();
/// assert_skipped!(out);
/// ```
#[macro_export]
macro_rules! assert_skipped {
    ($outcome:expr) => {
        match &$outcome {
            $crate::Outcome::Skipped => {}
            other => panic!("Expected Skipped, got {:?}", other),
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for crate::Outcome<T, E>
where
    T: Arbitrary + 'static,
    T::Parameters: Clone,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            proptest::strategy::LazyJust::new(|| crate::Outcome::Skipped),
            any_with::<T>(t_params.clone()).prop_map(crate::Outcome::completed),
            (
                proptest::option::of(any_with::<T>(t_params)),
                any_with::<E>(e_params)
            )
                .prop_map(|(value, error)| crate::Outcome::faulted(value, error)),
        ]
        .boxed()
    }
}
