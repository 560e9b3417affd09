//! Total keyed lookup through an optional container.
//!
//! Plain map indexing has two failure modes that force checks at the call
//! site: the container itself may be absent, and the key may be missing.
//! [`LookupExt`] collapses both into one total operation: either case yields
//! `None` (or the caller's fallback), never a panic.
//!
//! ```rust
//! use std::collections::HashMap;
//! use shallows::LookupExt;
//!
//! let mut settings = HashMap::new();
//! settings.insert("theme", "dark");
//!
//! let settings = Some(settings);
//! assert_eq!(settings.with_key(&"theme"), Some(&"dark"));
//! assert_eq!(settings.with_key(&"locale"), None);
//!
//! let missing: Option<HashMap<&str, &str>> = None;
//! assert_eq!(missing.with_key(&"theme"), None);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A keyed container that can be probed for a value by reference.
///
/// Implemented for [`HashMap`] and [`BTreeMap`]; implement it for your own
/// container types to make them usable with [`LookupExt`].
pub trait Lookup {
    /// The key type.
    type Key: ?Sized;
    /// The stored value type.
    type Value;

    /// Look up `key`, returning `None` when it is absent.
    fn find(&self, key: &Self::Key) -> Option<&Self::Value>;
}

impl<K, V, S> Lookup for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn find(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V> Lookup for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn find(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<M> Lookup for &M
where
    M: Lookup + ?Sized,
{
    type Key = M::Key;
    type Value = M::Value;

    #[inline]
    fn find(&self, key: &Self::Key) -> Option<&Self::Value> {
        (**self).find(key)
    }
}

/// Extension trait for looking up keys through an optional container.
pub trait LookupExt<M: Lookup> {
    /// Look up `key` in the container, treating an absent container and an
    /// absent key alike: both yield `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use shallows::LookupExt;
    ///
    /// let mut scores = BTreeMap::new();
    /// scores.insert("alice".to_string(), 12);
    ///
    /// let scores = Some(scores);
    /// assert_eq!(scores.with_key(&"alice".to_string()), Some(&12));
    /// assert_eq!(scores.with_key(&"bob".to_string()), None);
    /// ```
    fn with_key<'a>(&'a self, key: &M::Key) -> Option<&'a M::Value>;

    /// Look up `key`, yielding a clone of the stored value, or `fallback`
    /// when the container or the key is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use shallows::LookupExt;
    ///
    /// let mut ports = HashMap::new();
    /// ports.insert("http", 80u16);
    ///
    /// let ports = Some(ports);
    /// assert_eq!(ports.with_key_or(&"http", 0), 80);
    /// assert_eq!(ports.with_key_or(&"gopher", 0), 0);
    ///
    /// let missing: Option<HashMap<&str, u16>> = None;
    /// assert_eq!(missing.with_key_or(&"http", 0), 0);
    /// ```
    fn with_key_or(&self, key: &M::Key, fallback: M::Value) -> M::Value
    where
        M::Value: Clone;
}

impl<M: Lookup> LookupExt<M> for Option<M> {
    fn with_key<'a>(&'a self, key: &M::Key) -> Option<&'a M::Value> {
        self.as_ref().and_then(|container| container.find(key))
    }

    fn with_key_or(&self, key: &M::Key, fallback: M::Value) -> M::Value
    where
        M::Value: Clone,
    {
        match self.with_key(key) {
            Some(value) => value.clone(),
            None => fallback,
        }
    }
}
