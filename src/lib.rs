//! # Shallows
//!
//! > *"Cross where the water is shallow"*
//!
//! Chaining combinators for values that may be absent or whose computation
//! may fail, without a presence check or a `match` at every link.
//!
//! ## Philosophy
//!
//! A chain of dependent lookups (`a.b.c.d`) should read as a chain. Each
//! combinator embeds its own absence check: `None` short-circuits, a present
//! value flows on. Failure capture is explicit and local: the guarded
//! combinators reify a fallible closure's error into an [`Outcome`] that the
//! caller must consciously [`handle`](Outcome::handle) or
//! [`ignore`](Outcome::ignore).
//!
//! ## Quick Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use shallows::prelude::*;
//!
//! struct Profile {
//!     nickname: Option<String>,
//!     settings: Option<HashMap<String, String>>,
//! }
//!
//! let profile = Some(Profile {
//!     nickname: Some("grace".to_string()),
//!     settings: None,
//! });
//!
//! // Each link checks for absence itself.
//! let banner = profile
//!     .with(|p| p.nickname)
//!     .flatten()
//!     .when(|n| !n.is_empty())
//!     .with_or(|n| format!("welcome, {n}"), "welcome, guest".to_string());
//! assert_eq!(banner, "welcome, grace");
//!
//! // Lookups through an optional container are total.
//! let settings: Option<HashMap<String, String>> = None;
//! assert_eq!(settings.with_key(&"theme".to_string()), None);
//! ```
//!
//! ## Modules
//!
//! - [`maybe`]: presence tests, projections, fallbacks, and side-effecting
//!   taps for single values.
//! - [`lookup`]: total keyed lookup through an optional container.
//! - [`seq`]: element-wise projection and taps over an optional sequence.
//! - [`outcome`]: failure capture via [`Outcome`] and [`TryExt`].
//! - [`future`]: async projection, including concurrent fan-out over a
//!   sequence with order-preserving fan-in.
//! - [`testing`]: call-recording [`Probe`](testing::Probe) and outcome
//!   assertion macros.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod future;
pub mod lookup;
pub mod maybe;
pub mod outcome;
pub mod seq;
pub mod testing;

// Re-exports
pub use future::{MaybeFutureExt, SeqFutureExt};
pub use lookup::{Lookup, LookupExt};
pub use maybe::MaybeExt;
pub use outcome::{Outcome, TryExt};
pub use seq::SeqExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::future::{MaybeFutureExt, SeqFutureExt};
    pub use crate::lookup::{Lookup, LookupExt};
    pub use crate::maybe::MaybeExt;
    pub use crate::outcome::{Outcome, TryExt};
    pub use crate::seq::SeqExt;
}
