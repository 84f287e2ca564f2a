//! Property-based tests for repetition bookkeeping.
//!
//! A plain `Vec<ElementId>` models each repeating store; every operation is
//! applied to both and the two must agree afterwards.

mod common;

use common::*;
use hl7v2_structure::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add,
    Get(usize),
    Insert(usize),
    RemoveAt(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        2 => (0usize..8).prop_map(Op::Get),
        1 => (0usize..8).prop_map(Op::Insert),
        2 => (0usize..8).prop_map(Op::RemoveAt),
    ]
}

proptest! {
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(op(), 0..40)) {
        let mut group = Group::new(create_test_group());
        let mut model: Vec<ElementId> = Vec::new();

        for op in ops {
            match op {
                Op::Add => {
                    let id = group.add_structure("B").unwrap().id();
                    model.push(id);
                }
                Op::Get(rep) => {
                    let result = group.get_structure_rep("B", rep).map(|e| e.id());
                    if rep < model.len() {
                        prop_assert_eq!(result.unwrap(), model[rep]);
                    } else if rep == model.len() {
                        model.push(result.unwrap());
                    } else {
                        let is_index_error = matches!(result, Err(Hl7StructureError::RepetitionIndex { .. }));
                        prop_assert!(is_index_error);
                    }
                }
                Op::Insert(index) => {
                    let result = group.insert_repetition("B", index).map(|e| e.id());
                    if index <= model.len() {
                        model.insert(index, result.unwrap());
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::RemoveAt(index) => {
                    let result = group.remove_repetition_at("B", index).map(|e| e.id());
                    if index < model.len() {
                        prop_assert_eq!(result.unwrap(), model.remove(index));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
            }

            prop_assert_eq!(group.repetitions_used("B").unwrap(), model.len());
            prop_assert_eq!(ids(group.get_all("B").unwrap()), model.clone());
        }
    }

    #[test]
    fn prop_add_then_get_last(n in 1usize..20) {
        let mut group = Group::new(create_test_group());
        let mut last = None;
        for _ in 0..n {
            last = Some(group.add_structure("B").unwrap().id());
        }

        prop_assert_eq!(group.repetitions_used("B").unwrap(), n);
        prop_assert_eq!(Some(group.get_structure_rep("B", n - 1).unwrap().id()), last);
    }

    #[test]
    fn prop_remove_shifts_down_by_one(n in 1usize..12, pick in any::<prop::sample::Index>()) {
        let mut group = Group::new(create_test_group());
        for _ in 0..n {
            group.add_structure("B").unwrap();
        }
        let before = ids(group.get_all("B").unwrap());
        let i = pick.index(n);

        group.remove_repetition_at("B", i).unwrap();
        let after = ids(group.get_all("B").unwrap());

        prop_assert_eq!(after.len(), n - 1);
        prop_assert_eq!(&after[..i], &before[..i]);
        prop_assert_eq!(&after[i..], &before[i + 1..]);
    }

    #[test]
    fn prop_get_structure_creates_at_least_one(use_a in any::<bool>(), calls in 1usize..5) {
        let name = if use_a { "A" } else { "B" };
        let mut group = Group::new(create_test_group());
        for _ in 0..calls {
            group.get_structure(name).unwrap();
        }
        prop_assert_eq!(group.repetitions_used(name).unwrap(), 1);
    }

    #[test]
    fn prop_slot_order_is_stable(accesses in prop::collection::vec(prop_oneof![Just("A"), Just("B")], 0..10)) {
        let mut group = Group::new(create_test_group());
        for name in accesses {
            group.get_structure(name).unwrap();
        }
        let names: Vec<_> = group.children().map(|(slot, _)| slot.name.clone()).collect();
        prop_assert_eq!(names, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn prop_field_access_boundary(used in 0usize..5, rep in 0usize..8) {
        let mut segment = Segment::new(create_test_segment("ZPI"));
        for _ in 0..used {
            segment.add_field_repetition(3).unwrap();
        }

        let result = segment.get_field(3, rep).map(|_| ());
        prop_assert_eq!(result.is_ok(), rep <= used);
        let expected = if rep == used { used + 1 } else { used };
        prop_assert_eq!(segment.field_repetitions_used(3).unwrap(), expected);
    }
}
