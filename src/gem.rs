//! Priced gemstone value object.
//!
//! This module provides [`Gem`], an immutable record describing a single
//! gemstone by its weight in carats, its price per carat, and its
//! transparency percentage. The total price is derived on demand and never
//! stored.
//!
//! # Equality
//!
//! Two gems are equal iff all three stored fields have identical IEEE-754
//! bit patterns ([`f64::to_bits`]). There is no epsilon tolerance: a gem
//! weighing `0.1 + 0.2` carats is *not* equal to one weighing `0.3` carats.
//! This exactness is part of the contract — callers that want tolerant
//! comparison must round before construction. [`Hash`] is computed from the
//! same bit patterns, so equal gems always hash equal.
//!
//! The derived price does not participate in equality.
//!
//! # Examples
//!
//! ```rust
//! use gemset::Gem;
//!
//! let diamond = Gem::new(1.5, 5000.0, 95.0)?;
//! assert_eq!(diamond.price(), 7500.0);
//! assert_eq!(diamond.weight(), 1.5);
//!
//! // Structural equality over the stored fields
//! let same_stone = Gem::new(1.5, 5000.0, 95.0)?;
//! assert_eq!(diamond, same_stone);
//! # Ok::<(), gemset::GemError>(())
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

// =============================================================================
// Gem Error
// =============================================================================

/// Errors that can occur when constructing a [`Gem`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GemError {
    /// A field was NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite {
        /// Name of the rejected field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

// =============================================================================
// Gem
// =============================================================================

/// An immutable priced gemstone.
///
/// A gem is described by three stored fields:
///
/// - `weight` — carats; expected positive, not enforced
/// - `price_per_carat` — expected non-negative, not enforced
/// - `transparency` — percentage; expected in `[0, 100]`, not enforced
///
/// Only finiteness is validated at construction. The total price is
/// derived as `price_per_carat * weight` each time [`Gem::price`] is
/// called.
///
/// # Examples
///
/// ```rust
/// use gemset::Gem;
///
/// let ruby = Gem::new(2.0, 3000.0, 80.0)?;
/// assert_eq!(ruby.price(), 6000.0);
/// # Ok::<(), gemset::GemError>(())
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gem {
    weight: f64,
    price_per_carat: f64,
    transparency: f64,
}

impl Gem {
    /// Creates a new gem from a finite field triple.
    ///
    /// # Errors
    ///
    /// Returns [`GemError::NonFinite`] if any field is NaN or infinite.
    /// No other validation is performed; out-of-range but finite values
    /// (a negative weight, a transparency above 100) are accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gemset::Gem;
    ///
    /// let topaz = Gem::new(3.0, 500.0, 60.0)?;
    /// assert_eq!(topaz.transparency(), 60.0);
    ///
    /// assert!(Gem::new(f64::NAN, 500.0, 60.0).is_err());
    /// # Ok::<(), gemset::GemError>(())
    /// ```
    pub fn new(weight: f64, price_per_carat: f64, transparency: f64) -> Result<Self, GemError> {
        for (field, value) in [
            ("weight", weight),
            ("price_per_carat", price_per_carat),
            ("transparency", transparency),
        ] {
            if !value.is_finite() {
                return Err(GemError::NonFinite { field, value });
            }
        }

        Ok(Self {
            weight,
            price_per_carat,
            transparency,
        })
    }

    /// Returns the weight in carats.
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the price per carat.
    #[inline]
    #[must_use]
    pub const fn price_per_carat(&self) -> f64 {
        self.price_per_carat
    }

    /// Returns the transparency percentage.
    #[inline]
    #[must_use]
    pub const fn transparency(&self) -> f64 {
        self.transparency
    }

    /// Returns the total price, derived as `price_per_carat * weight`.
    ///
    /// The price is computed on every call, never cached, and never
    /// participates in equality or hashing.
    #[inline]
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price_per_carat * self.weight
    }

    /// The three stored fields as bit patterns, in declaration order.
    ///
    /// Single source of truth for [`PartialEq`] and [`Hash`].
    #[inline]
    fn field_bits(&self) -> [u64; 3] {
        [
            self.weight.to_bits(),
            self.price_per_carat.to_bits(),
            self.transparency.to_bits(),
        ]
    }
}

impl PartialEq for Gem {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.field_bits() == other.field_bits()
    }
}

impl Eq for Gem {}

impl Hash for Gem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field_bits().hash(state);
    }
}

impl fmt::Display for Gem {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} ct @ {}/ct, {}% transparent",
            self.weight, self.price_per_carat, self.transparency
        )
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Gem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct GemFields {
            weight: f64,
            price_per_carat: f64,
            transparency: f64,
        }

        let fields = GemFields::deserialize(deserializer)?;
        Self::new(fields.weight, fields.price_per_carat, fields.transparency)
            .map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
