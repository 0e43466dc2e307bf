//! # gemset
//!
//! Priced gemstones and an insertion-ordered, duplicate-free collection
//! of them, built on a doubly-linked chain.
//!
//! ## Overview
//!
//! This library provides two components:
//!
//! - **[`Gem`]**: an immutable value object describing a gemstone by
//!   weight, per-carat price, and transparency, with a derived total
//!   price and bit-exact structural equality.
//! - **[`LinkedSet`]**: a generic set abstraction — unique elements,
//!   insertion order preserved — implemented from scratch on a
//!   doubly-linked chain rather than a hash table or tree. Membership is
//!   a linear equality scan, so elements only need [`PartialEq`].
//!
//! [`GemSet`] names the flagship instantiation, `LinkedSet<Gem>`.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Gem`] and [`LinkedSet`]
//!   (sets serialize as sequences in insertion order; duplicates collapse
//!   to their first occurrence on deserialization)
//!
//! ## Example
//!
//! ```rust
//! use gemset::{Gem, GemSet};
//!
//! let mut collection = GemSet::new();
//! collection.insert(Gem::new(1.5, 5000.0, 95.0)?);
//! collection.insert(Gem::new(2.0, 3000.0, 80.0)?);
//!
//! // A structurally equal stone is rejected
//! assert!(!collection.insert(Gem::new(1.5, 5000.0, 95.0)?));
//! assert_eq!(collection.len(), 2);
//!
//! // Snapshots materialize insertion order
//! let prices: Vec<f64> = collection.iter().map(Gem::price).collect();
//! assert_eq!(prices, vec![7500.0, 6000.0]);
//! # Ok::<(), gemset::GemError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod gem;
pub mod linked_set;

pub use gem::Gem;
pub use gem::GemError;
pub use linked_set::LinkedSet;
pub use linked_set::LinkedSetIntoIterator;
pub use linked_set::LinkedSetIterator;

/// An insertion-ordered, duplicate-free collection of [`Gem`]s.
pub type GemSet = LinkedSet<Gem>;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use gemset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::GemSet;
    pub use crate::gem::Gem;
    pub use crate::gem::GemError;
    pub use crate::linked_set::LinkedSet;
}

// The auto-trait surface is part of the public contract: the collection
// is single-threaded but freely movable across threads when its elements
// are.
static_assertions::assert_impl_all!(Gem: Send, Sync, Copy);
static_assertions::assert_impl_all!(LinkedSet<Gem>: Send, Sync, Clone);
