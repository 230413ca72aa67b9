//! Key membership in pipeline order.
//!
//! [`is_member_of`] fixes the collection and returns a predicate over keys,
//! which is the shape needed to test many keys against one map:
//!
//! ```
//! use std::collections::HashMap;
//! use pointfree::membership::is_member_of;
//!
//! let stock = HashMap::from([("apple", 3), ("pear", 0)]);
//! let in_catalogue = is_member_of(&stock);
//!
//! let wanted = ["apple", "kiwi", "pear"];
//! let known: Vec<&str> = wanted.into_iter().filter(|item| in_catalogue(item)).collect();
//! assert_eq!(known, vec!["apple", "pear"]);
//! ```
//!
//! Lookups go through [`Borrow`], exactly like `HashMap::contains_key`, so a
//! `HashMap<String, _>` can be queried with `&str`.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// A collection that can answer "is this key present?".
///
/// Implemented for the standard maps and sets, and for shared references to
/// any implementor.
pub trait KeyedCollection<Q: ?Sized> {
    /// Returns `true` if `key` is a key of the collection.
    fn contains_key(&self, key: &Q) -> bool;
}

impl<K, V, S, Q> KeyedCollection<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn contains_key(&self, key: &Q) -> bool {
        Self::contains_key(self, key)
    }
}

impl<K, V, Q> KeyedCollection<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    #[inline]
    fn contains_key(&self, key: &Q) -> bool {
        Self::contains_key(self, key)
    }
}

impl<K, S, Q> KeyedCollection<Q> for HashSet<K, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn contains_key(&self, key: &Q) -> bool {
        self.contains(key)
    }
}

impl<K, Q> KeyedCollection<Q> for BTreeSet<K>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    #[inline]
    fn contains_key(&self, key: &Q) -> bool {
        self.contains(key)
    }
}

impl<C, Q> KeyedCollection<Q> for &C
where
    C: KeyedCollection<Q> + ?Sized,
    Q: ?Sized,
{
    #[inline]
    fn contains_key(&self, key: &Q) -> bool {
        (**self).contains_key(key)
    }
}

/// Returns a predicate that holds when its argument is a key of `collection`.
///
/// The argument order is reversed from `collection.contains_key(key)`: the
/// collection is fixed first.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use pointfree::membership::is_member_of;
///
/// let ports = BTreeMap::from([(String::from("http"), 80), (String::from("https"), 443)]);
/// let is_known_scheme = is_member_of(&ports);
///
/// assert!(is_known_scheme("https"));
/// assert!(!is_known_scheme("gopher"));
/// ```
#[inline]
pub fn is_member_of<Q, C>(collection: C) -> impl Fn(&Q) -> bool
where
    Q: ?Sized,
    C: KeyedCollection<Q>,
{
    move |key| collection.contains_key(key)
}
