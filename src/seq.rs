//! Element-wise combinators for an optional sequence.
//!
//! The container being absent is not the same thing as the container being
//! empty: `None` propagates as `None`, while `Some` of a zero-element
//! sequence yields a zero-element result. Both combinators preserve element
//! order.
//!
//! ```rust
//! use shallows::SeqExt;
//!
//! let words = Some(vec!["a", "b", "c"]);
//! assert_eq!(words.with_each(|w| w.to_uppercase()),
//!            Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]));
//!
//! let missing: Option<Vec<&str>> = None;
//! assert_eq!(missing.with_each(|w| w.to_uppercase()), None);
//! ```

/// Extension trait for mapping and tapping over an optional sequence.
///
/// Implemented for `Option<C>` where `C` is any by-value iterable.
/// [`tap_each`](SeqExt::tap_each) additionally asks that the container
/// iterate by reference, since it hands the container back unchanged.
pub trait SeqExt<T>: Sized {
    /// The container type held inside the option.
    type Seq: IntoIterator<Item = T>;

    /// Apply `project` to every element in order, eagerly collecting into a
    /// `Vec`. An absent container short-circuits to `None` without invoking
    /// `project`; an empty one yields `Some` of an empty `Vec`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::SeqExt;
    ///
    /// assert_eq!(Some(vec![1, 2, 3]).with_each(|n| n * 10), Some(vec![10, 20, 30]));
    /// assert_eq!(Some(Vec::<i32>::new()).with_each(|n| n * 10), Some(vec![]));
    /// ```
    fn with_each<U, F>(self, project: F) -> Option<Vec<U>>
    where
        F: FnMut(T) -> U;

    /// Run `action` on every element in order, returning the original
    /// container unchanged. Nothing runs when the container is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shallows::SeqExt;
    ///
    /// let mut total = 0;
    /// let out = Some(vec![1, 2, 3]).tap_each(|n| total += n);
    ///
    /// assert_eq!(out, Some(vec![1, 2, 3]));
    /// assert_eq!(total, 6);
    /// ```
    fn tap_each<F>(self, action: F) -> Self
    where
        F: FnMut(&T),
        for<'a> &'a Self::Seq: IntoIterator<Item = &'a T>;
}

impl<C, T> SeqExt<T> for Option<C>
where
    C: IntoIterator<Item = T>,
{
    type Seq = C;

    fn with_each<U, F>(self, project: F) -> Option<Vec<U>>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Some(items) => Some(items.into_iter().map(project).collect()),
            None => None,
        }
    }

    fn tap_each<F>(self, mut action: F) -> Self
    where
        F: FnMut(&T),
        for<'a> &'a C: IntoIterator<Item = &'a T>,
    {
        if let Some(items) = &self {
            for item in items {
                action(item);
            }
        }
        self
    }
}
