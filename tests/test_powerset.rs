//! Integration tests for power-set enumeration.
//!
//! `generate_power_set` (bit patterns of one width) and `create_power_set`
//! (sub-collections of a set's members) are tested separately.

use atomset::{create_power_set, generate_power_set, Element, ReferenceList, Set, SetsError};
use proptest::prelude::*;
use std::collections::HashSet;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// generate_power_set
// =============================================================================

#[test]
fn test_generate_two_bits_order() {
    init_logging();
    let ps = generate_power_set(2).unwrap();
    let bits: Vec<String> = ps.iter().map(Element::to_bit_string).collect();
    assert_eq!(bits, vec!["00", "01", "10", "11"]);
}

#[test]
fn test_generate_counts_and_distinct() {
    init_logging();
    for n in 0..=12usize {
        let ps = generate_power_set(n).unwrap();
        assert_eq!(ps.len(), 1 << n);
        assert_eq!(ps.size(), n);

        let distinct: HashSet<&Element> = ps.iter().collect();
        assert_eq!(distinct.len(), ps.len());
    }
}

#[test]
fn test_generate_index_matches_from_number() {
    let n = 6;
    let ps = generate_power_set(n).unwrap();
    for (k, e) in ps.iter().enumerate() {
        assert_eq!(*e, Element::from_number(k as u64, n).unwrap());
    }
}

#[test]
fn test_generate_bounds() {
    let ps = generate_power_set(4).unwrap();
    assert!(ps[0].is_empty());
    assert!(ps[ps.len() - 1].is_full());
}

#[test]
fn test_generate_every_element_is_member() {
    let ps = generate_power_set(5).unwrap();
    let e = Element::from_bits("10110", 5).unwrap();
    assert!(e.is_member(&ps).unwrap());
}

#[test]
fn test_generate_overflow_guard() {
    assert!(matches!(
        generate_power_set(200),
        Err(SetsError::WidthOverflow { size: 200, .. })
    ));
}

// =============================================================================
// create_power_set
// =============================================================================

#[test]
fn test_create_over_atoms_matches_generate() {
    init_logging();
    let rl = ReferenceList::from_names(["a", "b", "c", "d"]).unwrap();
    let atoms = Set::from_reference_list(&rl).unwrap();

    let subsets = create_power_set(&atoms).unwrap();
    let patterns = generate_power_set(rl.len()).unwrap();

    assert_eq!(subsets.len(), patterns.len());
    for (subset, pattern) in subsets.iter().zip(patterns.iter()) {
        assert_eq!(subset.union_all(), *pattern);
        assert_eq!(subset.len(), pattern.card());
    }
}

#[test]
fn test_create_named_rendering() {
    let rl = ReferenceList::from_names(["x", "y"]).unwrap();
    let atoms = Set::from_reference_list(&rl).unwrap();

    let rendered: Vec<String> = create_power_set(&atoms)
        .unwrap()
        .iter()
        .map(|s| s.to_name_string(&rl).unwrap())
        .collect();

    assert_eq!(rendered, vec!["{}", "{{y}}", "{{x}}", "{{x}, {y}}"]);
}

#[test]
fn test_create_keeps_duplicates_as_distinct_items() {
    let mut s = Set::new(2);
    s.push(Element::from_bits("11", 2).unwrap()).unwrap();
    s.push(Element::from_bits("11", 2).unwrap()).unwrap();

    let subsets = create_power_set(&s).unwrap();
    assert_eq!(subsets.len(), 4);
    assert_eq!(subsets[1], subsets[2]);
    assert_eq!(subsets[3].len(), 2);
}

#[test]
fn test_create_does_not_touch_input() {
    let atoms = Set::atoms(3).unwrap();
    let before = atoms.clone();
    let _ = create_power_set(&atoms).unwrap();
    assert_eq!(atoms, before);
}

// =============================================================================
// Property-Based Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_generate_member_k_is_number_k(n in 0..=10usize, k in any::<u64>()) {
        let ps = generate_power_set(n).unwrap();
        let k = (k as usize) % ps.len();
        prop_assert_eq!(ps[k].to_number(), k as u64);
    }

    #[test]
    fn prop_create_sizes(m in 0..=8usize) {
        let s = Set::atoms(m).unwrap();
        let subsets = create_power_set(&s).unwrap();
        prop_assert_eq!(subsets.len(), 1usize << m);
        let total: usize = subsets.iter().map(Set::len).sum();
        // each member appears in half of the sub-sets
        prop_assert_eq!(total, m * (1usize << m) / 2);
    }
}
