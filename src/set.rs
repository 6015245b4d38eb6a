use core::fmt;
use std::borrow::Borrow;

use crate::{Iter, SplayTree};

/// An ordered set based on a [splay tree].
///
/// Because the tree is self-adjusting, lookups restructure it: `contains`,
/// `get` and the bound queries all take `&mut self`. A lookup is not a
/// side-effect-free read, and the exclusive borrow makes that visible in
/// the signature.
///
/// [splay tree]: https://en.wikipedia.org/wiki/Splay_tree
pub struct SplaySet<T: Ord> {
    tree: SplayTree<T>,
}

impl<T: Ord> SplaySet<T> {
    /// Creates a new, empty `SplaySet`.
    pub const fn new() -> Self {
        Self {
            tree: SplayTree::new(),
        }
    }

    /// Returns `true` if the set contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of elements in the set.
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Adds a key to the set.
    ///
    /// Returns `true` if the key was not already present. Duplicates are
    /// rejected, but the equal node still counts as an access and is
    /// splayed to the root.
    #[inline]
    pub fn insert(&mut self, key: T) -> bool {
        self.tree.insert(key)
    }

    /// Removes a key from the set, returning whether it was present.
    ///
    /// Removing an absent key is a no-op.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(key).is_some()
    }

    /// Returns `true` if the set contains `key`.
    #[inline]
    pub fn contains<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(key)
    }

    /// Returns a reference to the stored key equal to `key`.
    ///
    /// A hit is splayed to the root; a miss splays the last probed node.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get(key)
    }

    /// Returns the minimum key in the set.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns the maximum key in the set.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Returns the smallest key greater than or equal to `key`.
    #[inline]
    pub fn lower_bound<Q>(&mut self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.lower_bound(key)
    }

    /// Returns the smallest key strictly greater than `key`.
    #[inline]
    pub fn upper_bound<Q>(&mut self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.upper_bound(key)
    }

    /// Counts the keys in the inclusive range `[lo, hi]`.
    ///
    /// A range holding k keys costs O(k) beyond the two bound lookups.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    #[inline]
    pub fn range_count<Q>(&mut self, lo: &Q, hi: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.range_count(lo, hi)
    }

    /// Returns the key at the root of the tree.
    ///
    /// The most recently touched key is always at the root.
    #[inline]
    pub fn root_key(&self) -> Option<&T> {
        self.tree.root_key()
    }

    /// Gets an iterator over the keys of the set, in ascending order.
    ///
    /// Iteration does not splay.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }

    /// Clears the set, dropping all keys.
    #[inline]
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        self.tree.assert_invariants();
    }
}

impl<T: Ord> Default for SplaySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Clone for SplaySet<T> {
    /// Duplicates the set key-by-key.
    ///
    /// The copy is rebuilt from an in-order walk of the source, which never
    /// splays the source tree; the copy's shape reflects the reinsertion
    /// order rather than the source's layout.
    fn clone(&self) -> Self {
        let mut set = SplaySet::new();
        set.extend(self.iter().cloned());
        set
    }
}

impl<T: Ord> Extend<T> for SplaySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: Ord> FromIterator<T> for SplaySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = SplaySet::new();
        set.extend(iter);
        set
    }
}

impl<'a, T: Ord> IntoIterator for &'a SplaySet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for SplaySet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
