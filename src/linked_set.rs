//! Insertion-ordered unique-element collection on a doubly-linked chain.
//!
//! This module provides [`LinkedSet`], a duplicate-free collection that
//! preserves insertion order. Unlike a hashed or tree-based set, membership
//! is decided by a linear equality scan over a doubly-linked chain of
//! nodes, so the element type only needs [`PartialEq`] — no hashing, no
//! ordering.
//!
//! # Overview
//!
//! Nodes live in an index-addressed slot arena: each node owns one element
//! plus `prev`/`next` links expressed as arena indices. Slots vacated by
//! removal are threaded onto an internal free list and reused by later
//! insertions, so a set that churns does not grow its arena.
//!
//! Uniqueness is structural: an insertion is rejected when any live node
//! already holds an equal element, first match wins.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity                     |
//! |------------------|--------------------------------|
//! | `insert`         | O(n) scan + O(1) link rewiring |
//! | `contains`       | O(n)                           |
//! | `remove`         | O(n) scan + O(1) unlink        |
//! | `len`/`is_empty` | O(1)                           |
//! | `front`/`back`   | O(1)                           |
//! | `clear`          | O(n) element release           |
//! | `iter`           | O(1) + O(n) traversal          |
//!
//! Linear-time membership is the deliberate trade-off of the linked design;
//! callers that need sub-linear lookups want a hashed set instead.
//!
//! # Examples
//!
//! ```rust
//! use gemset::LinkedSet;
//!
//! let mut set = LinkedSet::new();
//! assert!(set.insert("ruby"));
//! assert!(set.insert("topaz"));
//!
//! // Duplicate insertion is rejected
//! assert!(!set.insert("ruby"));
//! assert_eq!(set.len(), 2);
//!
//! // Insertion order is preserved
//! let elements: Vec<&&str> = set.iter().collect();
//! assert_eq!(elements, vec![&"ruby", &"topaz"]);
//!
//! // Removal relinks the chain around the vacated node
//! assert!(set.remove(&"ruby"));
//! assert_eq!(set.to_vec(), vec!["topaz"]);
//! ```

use std::borrow::Borrow;
use std::fmt;

// =============================================================================
// Chain Storage
// =============================================================================

/// A chain node owning one element and its neighbor links.
#[derive(Clone)]
struct Node<T> {
    element: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// One arena slot: either a live chain node or a free-list entry.
#[derive(Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

// =============================================================================
// LinkedSet
// =============================================================================

/// An insertion-ordered collection of unique elements.
///
/// The chain invariants, maintained by every operation:
///
/// - `len == 0` iff `head` and `tail` are both `None`
/// - following `next` from `head` visits every live node and ends at
///   `tail`; following `prev` from `tail` visits the same nodes reversed
/// - the head node has no `prev`, the tail node has no `next`
/// - no two live nodes hold equal elements
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement [`PartialEq`]; equality should
///   be structural and, where the element also hashes, consistent with its
///   hash ([`Gem`](crate::Gem) upholds both).
///
/// # Examples
///
/// ```rust
/// use gemset::{Gem, LinkedSet};
///
/// let mut collection = LinkedSet::new();
/// collection.insert(Gem::new(1.5, 5000.0, 95.0)?);
/// collection.insert(Gem::new(2.0, 3000.0, 80.0)?);
///
/// // A structurally equal stone is already present
/// assert!(!collection.insert(Gem::new(1.5, 5000.0, 95.0)?));
/// assert_eq!(collection.len(), 2);
/// # Ok::<(), gemset::GemError>(())
/// ```
#[derive(Clone)]
pub struct LinkedSet<T: PartialEq> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T: PartialEq> LinkedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gemset::LinkedSet;
    ///
    /// let set: LinkedSet<i32> = LinkedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Creates a set holding a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gemset::LinkedSet;
    ///
    /// let set = LinkedSet::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&42));
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::new();
        set.insert(element);
        set
    }

    /// Returns the number of elements in the set.
    ///
    /// O(1), backed by a maintained counter.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the oldest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head
            .and_then(|index| self.occupied(index))
            .map(|node| &node.element)
    }

    /// Returns a reference to the most recently inserted element, or
    /// `None` if empty.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.tail
            .and_then(|index| self.occupied(index))
            .map(|node| &node.element)
    }

    /// Returns `true` if the set contains an element equal to the
    /// candidate.
    ///
    /// This method supports borrowed forms of the element type through the
    /// `Borrow` trait. For example, with `LinkedSet<String>`, you can
    /// search using `&str` directly without allocating a new `String`.
    ///
    /// # Complexity
    ///
    /// O(n) linear scan from head to tail; `false` on an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gemset::LinkedSet;
    ///
    /// let set: LinkedSet<String> = ["ruby".to_string()].into_iter().collect();
    /// assert!(set.contains("ruby"));
    /// assert!(!set.contains("topaz"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(element).is_some()
    }

    /// Inserts an element, returning whether the set changed.
    ///
    /// Returns `false` without modification when an equal element is
    /// already present (first match wins). Otherwise the element is
    /// appended at the tail of the chain and `true` is returned.
    ///
    /// # Complexity
    ///
    /// O(n) for the duplicate scan; the link update itself is O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gemset::LinkedSet;
    ///
    /// let mut set = LinkedSet::new();
    /// assert!(set.insert(42));
    /// assert!(!set.insert(42));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.push_back(element);
        true
    }

    /// Removes the element equal to the candidate, returning whether the
    /// set changed.
    ///
    /// On the first structural match the node is unlinked (its neighbors
    /// are rewired around it, `head`/`tail` updated for endpoint removals)
    /// and its slot vacated for reuse. Returns `false` and leaves the set
    /// unchanged when no match is found.
    ///
    /// Borrowed forms of the element type are accepted as with
    /// [`contains`](Self::contains).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gemset::LinkedSet;
    ///
    /// let mut set: LinkedSet<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2));
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self.position(element) {
            Some(index) => self.unlink(index).is_some(),
            None => false,
        }
    }

    /// Removes all elements, resetting the set to the empty state.
    ///
    /// Every slot is dropped, releasing its element; the arena allocation
    /// is kept for reuse.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    /// Inserts every element of a sequence, returning `true` iff at least
    /// one insertion succeeded.
    ///
    /// A rejected duplicate never aborts the remaining insertions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gemset::LinkedSet;
    ///
    /// let mut set = LinkedSet::singleton(1);
    /// assert!(set.insert_all([1, 2, 3]));
    /// assert!(!set.insert_all([2, 3]));
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn insert_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut modified = false;
        for element in elements {
            if self.insert(element) {
                modified = true;
            }
        }
        modified
    }

    /// Returns `true` if every element of `other` is contained in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gemset::LinkedSet;
    ///
    /// let set: LinkedSet<i32> = [1, 2, 3].into_iter().collect();
    /// let subset: LinkedSet<i32> = [1, 3].into_iter().collect();
    /// assert!(set.is_superset(&subset));
    /// assert!(!subset.is_superset(&set));
    /// ```
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.iter().all(|element| self.contains(element))
    }

    /// Removes every element that is contained in `other`, returning
    /// `true` iff anything was removed.
    ///
    /// Surviving elements keep their relative order.
    pub fn remove_all(&mut self, other: &Self) -> bool {
        let initial_len = self.len;
        self.retain(|element| !other.contains(element));
        self.len != initial_len
    }

    /// Keeps only the elements that are contained in `other`, returning
    /// `true` iff anything was removed.
    ///
    /// Surviving elements keep their relative order.
    pub fn retain_all(&mut self, other: &Self) -> bool {
        let initial_len = self.len;
        self.retain(|element| other.contains(element));
        self.len != initial_len
    }

    /// Keeps only the elements for which the predicate returns `true`.
    ///
    /// Visits elements in insertion order; survivors keep their relative
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gemset::LinkedSet;
    ///
    /// let mut set: LinkedSet<i32> = [1, 2, 3, 4].into_iter().collect();
    /// set.retain(|element| element % 2 == 0);
    /// assert_eq!(set.to_vec(), vec![2, 4]);
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let (next, keep) = {
                let Some(node) = self.occupied(index) else {
                    break;
                };
                (node.next, predicate(&node.element))
            };
            cursor = next;
            if !keep {
                self.unlink(index);
            }
        }
    }

    /// Returns an iterator over references to the elements in insertion
    /// order.
    ///
    /// The iterator is double-ended (reverse traversal follows the `prev`
    /// links from the tail) and exact-size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gemset::LinkedSet;
    ///
    /// let set: LinkedSet<i32> = [3, 1, 2].into_iter().collect();
    /// let forward: Vec<i32> = set.iter().copied().collect();
    /// let backward: Vec<i32> = set.iter().rev().copied().collect();
    /// assert_eq!(forward, vec![3, 1, 2]);
    /// assert_eq!(backward, vec![2, 1, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> LinkedSetIterator<'_, T> {
        LinkedSetIterator {
            set: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Returns a snapshot of the elements in insertion order.
    ///
    /// The snapshot is an independent copy; later mutation of the set does
    /// not affect it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gemset::LinkedSet;
    ///
    /// let mut set: LinkedSet<i32> = [1, 2].into_iter().collect();
    /// let snapshot = set.to_vec();
    /// set.remove(&1);
    /// assert_eq!(snapshot, vec![1, 2]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Writes a snapshot of the elements into a caller-supplied buffer.
    ///
    /// The buffer is cleared and refilled in insertion order, reusing its
    /// existing allocation; it only grows when its capacity is smaller
    /// than the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gemset::LinkedSet;
    ///
    /// let set: LinkedSet<i32> = [1, 2, 3].into_iter().collect();
    /// let mut buffer = Vec::with_capacity(16);
    /// set.snapshot_into(&mut buffer);
    /// assert_eq!(buffer, vec![1, 2, 3]);
    /// assert!(buffer.capacity() >= 16);
    /// ```
    pub fn snapshot_into(&self, buffer: &mut Vec<T>)
    where
        T: Clone,
    {
        buffer.clear();
        buffer.extend(self.iter().cloned());
    }

    // =========================================================================
    // Chain internals
    // =========================================================================

    /// Returns the live node at `index`, or `None` for a vacant or
    /// out-of-range slot.
    #[inline]
    fn occupied(&self, index: usize) -> Option<&Node<T>> {
        match self.slots.get(index) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    #[inline]
    fn occupied_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        match self.slots.get_mut(index) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Finds the index of the first node holding an element equal to the
    /// candidate, scanning head to tail.
    fn position<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.occupied(index)?;
            if node.element.borrow() == element {
                return Some(index);
            }
            cursor = node.next;
        }
        None
    }

    /// Stores a node in the arena, reusing the free-list head when one is
    /// available, and returns its slot index.
    fn allocate(&mut self, node: Node<T>) -> usize {
        if let Some(index) = self.free_head
            && let Some(Slot::Vacant { next_free }) = self.slots.get(index)
        {
            self.free_head = *next_free;
            self.slots[index] = Slot::Occupied(node);
            return index;
        }

        self.slots.push(Slot::Occupied(node));
        self.slots.len() - 1
    }

    /// Appends an element at the tail of the chain.
    ///
    /// Callers must have established that no equal element is present.
    fn push_back(&mut self, element: T) {
        let index = self.allocate(Node {
            element,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail_index) => {
                if let Some(tail_node) = self.occupied_mut(tail_index) {
                    tail_node.next = Some(index);
                }
            }
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    /// Unlinks the node at `index` from the chain, vacates its slot onto
    /// the free list, and returns its element.
    ///
    /// Returns `None` for a vacant or out-of-range slot, leaving the set
    /// unchanged.
    fn unlink(&mut self, index: usize) -> Option<T> {
        let next_free = self.free_head;
        let slot = self.slots.get_mut(index)?;
        if !matches!(slot, Slot::Occupied(_)) {
            return None;
        }
        let Slot::Occupied(node) = std::mem::replace(slot, Slot::Vacant { next_free }) else {
            // slot matched Occupied above
            return None;
        };
        self.free_head = Some(index);
        self.len -= 1;

        match node.prev {
            Some(prev_index) => {
                if let Some(prev_node) = self.occupied_mut(prev_index) {
                    prev_node.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        match node.next {
            Some(next_index) => {
                if let Some(next_node) = self.occupied_mut(next_index) {
                    next_node.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }

        Some(node.element)
    }

    /// Walks the chain both ways and checks every structural invariant.
    ///
    /// Panics on the first violation; test-only.
    #[cfg(test)]
    fn assert_chain_invariants(&self) {
        assert_eq!(self.len == 0, self.head.is_none(), "len/head mismatch");
        assert_eq!(self.len == 0, self.tail.is_none(), "len/tail mismatch");

        let mut forward = Vec::new();
        let mut expected_prev = None;
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self
                .occupied(index)
                .expect("live link points at a vacant slot");
            assert_eq!(node.prev, expected_prev, "prev link broken at {index}");
            forward.push(index);
            expected_prev = Some(index);
            cursor = node.next;
        }
        assert_eq!(forward.len(), self.len, "forward walk misses nodes");
        assert_eq!(forward.last().copied(), self.tail, "tail not reached");

        let mut backward = Vec::new();
        let mut cursor = self.tail;
        while let Some(index) = cursor {
            let node = self
                .occupied(index)
                .expect("live link points at a vacant slot");
            backward.push(index);
            cursor = node.prev;
        }
        backward.reverse();
        assert_eq!(forward, backward, "forward and backward walks disagree");

        for (position, &left) in forward.iter().enumerate() {
            for &right in &forward[position + 1..] {
                let left_node = self.occupied(left).expect("walked index is live");
                let right_node = self.occupied(right).expect("walked index is live");
                assert!(
                    left_node.element != right_node.element,
                    "duplicate elements at slots {left} and {right}"
                );
            }
        }
    }
}

impl<T: PartialEq> Default for LinkedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> FromIterator<T> for LinkedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut set = Self::new();
        set.insert_all(elements);
        set
    }
}

impl<T: PartialEq> Extend<T> for LinkedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        self.insert_all(elements);
    }
}

impl<T: PartialEq> PartialEq for LinkedSet<T> {
    /// Set equality: same length and mutual containment, independent of
    /// insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq> Eq for LinkedSet<T> {}

impl<T: PartialEq + fmt::Debug> fmt::Debug for LinkedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq + fmt::Display> fmt::Display for LinkedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{element}")?;
        }
        formatter.write_str("}")
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of a [`LinkedSet`] in
/// insertion order.
pub struct LinkedSetIterator<'a, T: PartialEq> {
    set: &'a LinkedSet<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T: PartialEq> Iterator for LinkedSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.set.occupied(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: PartialEq> DoubleEndedIterator for LinkedSetIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.set.occupied(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T: PartialEq> ExactSizeIterator for LinkedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T: PartialEq> std::iter::FusedIterator for LinkedSetIterator<'_, T> {}

impl<'a, T: PartialEq> IntoIterator for &'a LinkedSet<T> {
    type Item = &'a T;
    type IntoIter = LinkedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over the elements of a [`LinkedSet`] in insertion
/// order.
pub struct LinkedSetIntoIterator<T: PartialEq> {
    set: LinkedSet<T>,
}

impl<T: PartialEq> Iterator for LinkedSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.set.head?;
        self.set.unlink(head)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.len, Some(self.set.len))
    }
}

impl<T: PartialEq> DoubleEndedIterator for LinkedSetIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let tail = self.set.tail?;
        self.set.unlink(tail)
    }
}

impl<T: PartialEq> ExactSizeIterator for LinkedSetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.set.len
    }
}

impl<T: PartialEq> std::iter::FusedIterator for LinkedSetIntoIterator<T> {}

impl<T: PartialEq> IntoIterator for LinkedSet<T> {
    type Item = T;
    type IntoIter = LinkedSetIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedSetIntoIterator { set: self }
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize + PartialEq> serde::Serialize for LinkedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct LinkedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> LinkedSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for LinkedSetVisitor<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    type Value = LinkedSet<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Duplicates in the input collapse to their first occurrence.
        let mut set = LinkedSet::new();
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for LinkedSet<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(LinkedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
