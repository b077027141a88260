//! The `List` contract, checked identically against both implementations.

mod common;

use dslib::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
enum Op {
    Add(i32),
    AddFirst(i32),
    Insert(usize, i32),
    Remove(usize),
    RemoveFirst,
    RemoveLast,
    Set(usize, i32),
    Swap(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Add),
        any::<i32>().prop_map(Op::AddFirst),
        (0usize..24, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        (0usize..24).prop_map(Op::Remove),
        Just(Op::RemoveFirst),
        Just(Op::RemoveLast),
        (0usize..24, any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
        (0usize..24, 0usize..24).prop_map(|(a, b)| Op::Swap(a, b)),
    ]
}

/// Applies `op` to both the list and a `Vec` model, checking that the list
/// reports the same outcome the model predicts.
fn apply<L: List<i32> + ?Sized>(list: &mut L, model: &mut Vec<i32>, op: &Op) {
    let len = model.len();
    let out_of_range = |index| Error::OutOfRange { index, len };

    match *op {
        Op::Add(v) => {
            list.add(v);
            model.push(v);
        }
        Op::AddFirst(v) => {
            list.add_first(v);
            model.insert(0, v);
        }
        Op::Insert(i, v) => {
            if i <= len {
                assert_eq!(list.insert(i, v), Ok(()));
                model.insert(i, v);
            } else {
                assert_eq!(list.insert(i, v), Err(out_of_range(i)));
            }
        }
        Op::Remove(i) => {
            if i < len {
                assert_eq!(list.remove(i), Ok(model.remove(i)));
            } else {
                assert_eq!(list.remove(i), Err(out_of_range(i)));
            }
        }
        Op::RemoveFirst => {
            if model.is_empty() {
                assert_eq!(list.remove_first(), Err(Error::Empty));
            } else {
                assert_eq!(list.remove_first(), Ok(model.remove(0)));
            }
        }
        Op::RemoveLast => {
            assert_eq!(list.remove_last(), model.pop().ok_or(Error::Empty));
        }
        Op::Set(i, v) => {
            if i < len {
                assert_eq!(list.set(i, v), Ok(model[i]));
                model[i] = v;
                assert_eq!(list.get(i), Ok(&v));
            } else {
                assert_eq!(list.set(i, v), Err(out_of_range(i)));
            }
        }
        Op::Swap(a, b) => {
            if a < len && b < len {
                assert_eq!(list.swap(a, b), Ok(()));
                model.swap(a, b);
            } else {
                let index = if a >= len { a } else { b };
                assert_eq!(list.swap(a, b), Err(out_of_range(index)));
            }
        }
    }
}

fn assert_matches_model<L: List<i32> + ?Sized>(list: &L, model: &[i32]) {
    assert_eq!(list.len(), model.len());
    assert_eq!(list.is_empty(), model.is_empty());
    assert_eq!(&*list.to_array(), model);

    for (i, elem) in model.iter().enumerate() {
        assert_eq!(list.get(i), Ok(elem));
    }

    assert_eq!(list.get_first(), model.first().ok_or(Error::Empty));
    assert_eq!(list.get_last(), model.last().ok_or(Error::Empty));
}

fn implementations() -> Vec<(&'static str, Box<dyn List<i32>>)> {
    let array: Box<dyn List<i32>> = Box::new(ArrayList::<i32>::new());
    let linked: Box<dyn List<i32>> = Box::new(LinkedList::<i32>::new());

    vec![("array", array), ("linked", linked)]
}

#[test]
fn boundary_rejection() {
    common::initialize();

    for (name, mut list) in implementations() {
        assert_eq!(list.get(0), Err(Error::OutOfRange { index: 0, len: 0 }), "{name}");
        assert_eq!(list.remove_first(), Err(Error::Empty), "{name}");
        assert_eq!(list.remove_last(), Err(Error::Empty), "{name}");
        assert_eq!(list.get_first(), Err(Error::Empty), "{name}");
        assert_eq!(list.get_last(), Err(Error::Empty), "{name}");

        list.add(1);
        list.add(2);

        let len = list.len();
        assert_eq!(list.get(len), Err(Error::OutOfRange { index: 2, len: 2 }), "{name}");
        assert_eq!(list.get(usize::MAX), Err(Error::OutOfRange { index: usize::MAX, len: 2 }), "{name}");
        assert_eq!(list.insert(len + 1, 9), Err(Error::OutOfRange { index: 3, len: 2 }), "{name}");
        assert_eq!(list.remove(len), Err(Error::OutOfRange { index: 2, len: 2 }), "{name}");

        // Rejected calls leave the list untouched.
        assert_matches_model(&*list, &[1, 2]);
    }
}

#[test]
fn growth_past_default_capacity() {
    common::initialize();

    let count = ArrayList::<i32>::DEFAULT_CAPACITY + 1;

    for (name, mut list) in implementations() {
        for i in 0..count {
            list.add(i as i32);
        }

        assert_eq!(list.len(), count, "{name}");
        let expected: Vec<i32> = (0..count as i32).collect();
        assert_matches_model(&*list, &expected);
    }
}

#[test]
fn interior_removal_preserves_order() {
    common::initialize();

    for (_, mut list) in implementations() {
        for elem in [10, 20, 30, 40, 50] {
            list.add(elem);
        }

        assert_eq!(list.remove(2), Ok(30));
        assert_matches_model(&*list, &[10, 20, 40, 50]);
        assert!(!list.exists(&30));

        assert_eq!(list.remove(1), Ok(20));
        assert_eq!(list.remove(1), Ok(40));
        assert_matches_model(&*list, &[10, 50]);
    }
}

#[test]
fn search_and_clear() {
    common::initialize();

    for (name, mut list) in implementations() {
        for elem in [7, 3, 7, 1] {
            list.add(elem);
        }

        assert_eq!(list.index_of(&7), Some(0), "{name}");
        assert_eq!(list.last_index_of(&7), Some(2), "{name}");
        assert_eq!(list.index_of(&5), None, "{name}");
        assert!(list.exists(&1), "{name}");

        let snapshot = list.to_array();
        list.clear();

        assert_matches_model(&*list, &[]);
        assert_eq!(&*snapshot, [7, 3, 7, 1]);

        list.add_last(4);
        assert_matches_model(&*list, &[4]);
    }
}

#[test]
fn sort_is_unsupported() {
    common::initialize();

    for (_, mut list) in implementations() {
        list.add(2);
        list.add(1);

        assert_eq!(list.sort(), Err(Error::Unsupported { operation: "sort" }));
        assert_matches_model(&*list, &[2, 1]);
    }
}

#[test]
fn random_workload_agrees_with_model() {
    common::initialize();

    let mut rng = StdRng::seed_from_u64(0x5eed);

    for (_, mut list) in implementations() {
        let mut model = Vec::new();

        for _ in 0..2_000 {
            let v = rng.gen::<i32>();
            let i = rng.gen_range(0..=model.len() + 1);

            let op = match rng.gen_range(0..8) {
                0 => Op::Add(v),
                1 => Op::AddFirst(v),
                2 => Op::Insert(i, v),
                3 => Op::Remove(i),
                4 => Op::RemoveFirst,
                5 => Op::RemoveLast,
                6 => Op::Set(i, v),
                _ => Op::Swap(i, rng.gen_range(0..=model.len())),
            };

            apply(&mut *list, &mut model, &op);
        }

        assert_matches_model(&*list, &model);
    }
}

proptest! {
    #[test]
    fn array_list_matches_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut list = ArrayList::new();
        let mut model = Vec::new();

        for op in &ops {
            apply(&mut list, &mut model, op);
        }

        prop_assert_eq!(list.len(), model.len());
        assert_matches_model(&list, &model);
    }

    #[test]
    fn linked_list_matches_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut list = LinkedList::new();
        let mut model = Vec::new();

        for op in &ops {
            apply(&mut list, &mut model, op);
        }

        prop_assert_eq!(list.len(), model.len());
        assert_matches_model(&list, &model);
    }

    #[test]
    fn set_then_get_round_trips(
        elems in prop::collection::vec(any::<i32>(), 1..32),
        index in any::<prop::sample::Index>(),
        value in any::<i32>(),
    ) {
        let i = index.index(elems.len());

        let mut array: ArrayList<i32> = elems.iter().copied().collect();
        let mut linked: LinkedList<i32> = elems.iter().copied().collect();

        prop_assert_eq!(array.set(i, value), Ok(elems[i]));
        prop_assert_eq!(linked.set(i, value), Ok(elems[i]));
        prop_assert_eq!(array.get(i), Ok(&value));
        prop_assert_eq!(linked.get(i), Ok(&value));
    }
}
