//! Unit tests for the Gem value object.
//!
//! These tests pin down the value semantics: derived price, bit-exact
//! structural equality, hash consistency, and fail-fast construction.

use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

use gemset::{Gem, GemError};
use rstest::rstest;

fn hash_of(gem: &Gem) -> u64 {
    let mut hasher = DefaultHasher::new();
    gem.hash(&mut hasher);
    hasher.finish()
}

#[rstest]
fn test_construction_stores_fields_verbatim() {
    let gem = Gem::new(1.5, 5000.0, 95.0).unwrap();
    assert_eq!(gem.weight(), 1.5);
    assert_eq!(gem.price_per_carat(), 5000.0);
    assert_eq!(gem.transparency(), 95.0);
}

#[rstest]
#[case::diamond(1.5, 5000.0, 7500.0)]
#[case::ruby(2.0, 3000.0, 6000.0)]
#[case::topaz(3.0, 500.0, 1500.0)]
#[case::weightless(0.0, 5000.0, 0.0)]
fn test_price_is_per_carat_price_times_weight(
    #[case] weight: f64,
    #[case] price_per_carat: f64,
    #[case] expected_price: f64,
) {
    let gem = Gem::new(weight, price_per_carat, 90.0).unwrap();
    assert_eq!(gem.price(), expected_price);
}

#[rstest]
fn test_equal_field_triples_compare_equal() {
    let first = Gem::new(1.5, 5000.0, 95.0).unwrap();
    let second = Gem::new(1.5, 5000.0, 95.0).unwrap();
    assert_eq!(first, second);
}

#[rstest]
#[case::weight_differs(2.1, 3000.0, 80.0)]
#[case::price_differs(2.0, 3000.5, 80.0)]
#[case::transparency_differs(2.0, 3000.0, 80.5)]
fn test_any_differing_field_breaks_equality(
    #[case] weight: f64,
    #[case] price_per_carat: f64,
    #[case] transparency: f64,
) {
    let reference = Gem::new(2.0, 3000.0, 80.0).unwrap();
    let other = Gem::new(weight, price_per_carat, transparency).unwrap();
    assert_ne!(reference, other);
}

#[rstest]
fn test_derived_price_does_not_participate_in_equality() {
    // Same total price from different field triples
    let first = Gem::new(1.0, 6000.0, 80.0).unwrap();
    let second = Gem::new(2.0, 3000.0, 80.0).unwrap();
    assert_eq!(first.price(), second.price());
    assert_ne!(first, second);
}

#[rstest]
fn test_equality_has_no_epsilon_tolerance() {
    let accumulated = Gem::new(0.1 + 0.2, 1000.0, 50.0).unwrap();
    let literal = Gem::new(0.3, 1000.0, 50.0).unwrap();
    assert_ne!(accumulated, literal);
}

#[rstest]
fn test_equal_gems_hash_equal() {
    let first = Gem::new(1.5, 5000.0, 95.0).unwrap();
    let second = Gem::new(1.5, 5000.0, 95.0).unwrap();
    assert_eq!(hash_of(&first), hash_of(&second));
}

#[rstest]
fn test_gems_deduplicate_in_a_hashed_set() {
    let mut hashed: HashSet<Gem> = HashSet::new();
    hashed.insert(Gem::new(1.5, 5000.0, 95.0).unwrap());
    hashed.insert(Gem::new(1.5, 5000.0, 95.0).unwrap());
    hashed.insert(Gem::new(2.0, 3000.0, 80.0).unwrap());
    assert_eq!(hashed.len(), 2);
}

#[rstest]
#[case::nan(f64::NAN)]
#[case::positive_infinity(f64::INFINITY)]
#[case::negative_infinity(f64::NEG_INFINITY)]
fn test_non_finite_weight_is_rejected(#[case] weight: f64) {
    let error = Gem::new(weight, 5000.0, 95.0).unwrap_err();
    assert!(matches!(error, GemError::NonFinite { field: "weight", .. }));
}

#[rstest]
fn test_finite_but_unusual_values_are_accepted() {
    // Only finiteness is enforced
    assert!(Gem::new(f64::MIN_POSITIVE, 0.0, 100.0).is_ok());
    assert!(Gem::new(-3.0, -1.0, 400.0).is_ok());
    assert!(Gem::new(f64::MAX, f64::MAX, 0.0).is_ok());
}
