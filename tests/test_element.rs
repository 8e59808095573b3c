//! Integration tests for Element construction, algebra and conversions.

use atomset::{Element, ReferenceList, Set, SetsError, MAX_ATOMS};
use proptest::prelude::*;
use rand::SeedableRng;

fn bit_string(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_from_bits_sets_atoms_by_position() {
    let e = Element::from_bits("0110", 4).unwrap();
    assert_eq!(e.atoms(), vec![1, 2]);
    assert_eq!(e.card(), 2);
}

#[test]
fn test_from_names_scenario() {
    let rl = ReferenceList::from_names(["a", "b", "c"]).unwrap();
    let e = Element::from_names(&["a", "c"], &rl).unwrap();

    assert_eq!(e.size(), 3);
    assert_eq!(e.to_bit_string(), "101");
    assert_eq!(e.to_name_string(&rl).unwrap(), "{a,c}");
}

#[test]
fn test_from_names_order_and_repeats_irrelevant() {
    let rl = ReferenceList::from_names(["a", "b", "c"]).unwrap();
    let e1 = Element::from_names(&["c", "a", "c"], &rl).unwrap();
    let e2 = Element::from_names(&["a", "c"], &rl).unwrap();
    assert_eq!(e1, e2);
}

#[test]
fn test_from_names_unknown() {
    let rl = ReferenceList::from_names(["a", "b", "c"]).unwrap();
    let err = Element::from_names(&["a", "d"], &rl).unwrap_err();
    assert!(matches!(err, SetsError::UnknownAtom(ref n) if n == "d"));
}

#[test]
fn test_from_names_empty_list() {
    let rl = ReferenceList::from_names(["a", "b"]).unwrap();
    let names: [&str; 0] = [];
    let e = Element::from_names(&names, &rl).unwrap();
    assert!(e.is_empty());
    assert_eq!(e.to_name_string(&rl).unwrap(), "{}");
}

#[test]
fn test_empty_is_union_identity_and_intersection_absorbing() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let e = Element::random(12, &mut rng);
        let empty = Element::empty(12);
        assert_eq!(e.disjunction(&empty).unwrap(), e);
        assert_eq!(e.conjunction(&empty).unwrap(), empty);
    }
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_to_name_string_follows_reference_order() {
    let rl = ReferenceList::from_names(["north", "east", "south", "west"]).unwrap();
    let e = Element::from_names(&["west", "north", "south"], &rl).unwrap();
    assert_eq!(e.to_name_string(&rl).unwrap(), "{north,south,west}");
}

#[test]
fn test_to_name_string_size_mismatch() {
    let rl = ReferenceList::from_names(["a", "b"]).unwrap();
    let e = Element::empty(3);
    assert!(matches!(
        e.to_name_string(&rl),
        Err(SetsError::SizeMismatch { left: 3, right: 2 })
    ));
}

// =============================================================================
// Membership
// =============================================================================

#[test]
fn test_is_member() {
    let atoms = Set::atoms(3).unwrap();
    assert!(Element::from_bits("001", 3).unwrap().is_member(&atoms).unwrap());
    assert!(!Element::from_bits("000", 3).unwrap().is_member(&atoms).unwrap());
    assert!(!Element::from_bits("101", 3).unwrap().is_member(&atoms).unwrap());
}

#[test]
fn test_is_member_empty_set() {
    let s = Set::new(3);
    assert!(!Element::empty(3).is_member(&s).unwrap());
}

#[test]
fn test_is_member_size_mismatch() {
    let s = Set::atoms(3).unwrap();
    assert!(matches!(
        Element::empty(4).is_member(&s),
        Err(SetsError::SizeMismatch { left: 3, right: 4 })
    ));
}

// =============================================================================
// Numeric conversion
// =============================================================================

#[test]
fn test_number_bijection_exhaustive_small() {
    for size in 0..=8usize {
        for k in 0..(1u64 << size) {
            let e = Element::from_number(k, size).unwrap();
            assert_eq!(e.size(), size);
            assert_eq!(e.to_number(), k);
        }
    }
}

#[test]
fn test_number_max_width() {
    let e = Element::from_number(1, MAX_ATOMS).unwrap();
    assert_eq!(e.atoms(), vec![63]);
    let e = Element::from_number(1 << 63, MAX_ATOMS).unwrap();
    assert_eq!(e.atoms(), vec![0]);
    assert!(matches!(
        Element::from_number(0, MAX_ATOMS + 1),
        Err(SetsError::WidthOverflow { .. })
    ));
}

// =============================================================================
// Property-Based Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_bit_string_round_trip(bits in prop::collection::vec(any::<bool>(), 0..=64)) {
        let s = bit_string(&bits);
        let e = Element::from_bits(&s, bits.len()).unwrap();
        prop_assert_eq!(e.to_bit_string(), s);
        prop_assert_eq!(e.card(), bits.iter().filter(|&&b| b).count());
    }

    #[test]
    fn prop_number_bijection(size in 1..=64usize, raw in any::<u64>()) {
        let k = if size == 64 { raw } else { raw & ((1u64 << size) - 1) };
        let e = Element::from_number(k, size).unwrap();
        prop_assert_eq!(e.to_number(), k);
    }

    #[test]
    fn prop_conjunction_commutes(size in 0..=64usize, seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let a = Element::random(size, &mut rng);
        let b = Element::random(size, &mut rng);
        prop_assert!(a.conjunction(&b).unwrap().equals(&b.conjunction(&a).unwrap()).unwrap());
        prop_assert!(a.disjunction(&b).unwrap().equals(&b.disjunction(&a).unwrap()).unwrap());
    }

    #[test]
    fn prop_double_complement(size in 0..=64usize, seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let e = Element::random(size, &mut rng);
        prop_assert!(e.opposite().opposite().equals(&e).unwrap());
        prop_assert_eq!(e.opposite().card(), size - e.card());
    }

    #[test]
    fn prop_subset_reflexive_and_empty_bottom(size in 0..=64usize, seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let e = Element::random(size, &mut rng);
        prop_assert!(e.is_subset(&e).unwrap());
        prop_assert!(Element::empty(size).is_subset(&e).unwrap());
        prop_assert!(e.is_subset(&Element::full(size)).unwrap());
    }

    #[test]
    fn prop_de_morgan(size in 0..=64usize, seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let a = Element::random(size, &mut rng);
        let b = Element::random(size, &mut rng);
        let lhs = a.conjunction(&b).unwrap().opposite();
        let rhs = a.opposite().disjunction(&b.opposite()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn prop_subset_iff_conjunction_is_self(size in 0..=16usize, seed in any::<u64>()) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let a = Element::random(size, &mut rng);
        let b = Element::random(size, &mut rng);
        prop_assert_eq!(a.is_subset(&b).unwrap(), a.conjunction(&b).unwrap() == a);
    }
}
