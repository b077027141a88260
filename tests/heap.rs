mod common;

use dslib::prelude::*;
use proptest::prelude::*;

fn assert_heap_order<L: List<i32>>(heap: &MinHeap<i32, L>) {
    let list = heap.as_list();

    for i in 1..list.len() {
        let parent = (i - 1) / 2;
        assert!(list.get(parent).unwrap() <= list.get(i).unwrap(), "parent {parent} > child {i}");
    }
}

fn drain<L: List<i32>>(heap: &mut MinHeap<i32, L>) -> Vec<i32> {
    let mut out = Vec::with_capacity(heap.len());

    while !heap.is_empty() {
        out.push(heap.extract_min().unwrap());
        assert_heap_order(heap);
    }

    assert_eq!(heap.extract_min(), Err(Error::Empty));
    out
}

#[test]
fn extraction_is_ascending() {
    common::initialize();

    let mut heap = MinHeap::new();
    for elem in [5, 10, 3, 8] {
        heap.insert(elem);
    }

    assert_eq!(drain(&mut heap), [3, 5, 8, 10]);
}

#[test]
fn linked_backing_behaves_like_array_backing() {
    common::initialize();

    let input = [9, -4, 17, 0, 0, 3, 12, -8, 5, 5, 1, 30];

    let mut array = MinHeap::new();
    let mut linked: MinHeap<i32, LinkedList<i32>> = MinHeap::default();

    for elem in input {
        array.insert(elem);
        linked.insert(elem);
    }

    assert_eq!(array.peek(), Ok(&-8));
    assert_eq!(linked.peek(), Ok(&-8));
    assert_eq!(drain(&mut array), drain(&mut linked));
}

proptest! {
    #[test]
    fn inserts_keep_heap_order(elems in prop::collection::vec(any::<i32>(), 0..128)) {
        let mut heap = MinHeap::new();

        for elem in &elems {
            heap.insert(*elem);
            assert_heap_order(&heap);
        }

        prop_assert_eq!(heap.len(), elems.len());
        prop_assert_eq!(heap.peek().ok(), elems.iter().min());
    }

    #[test]
    fn extraction_sorts(elems in prop::collection::vec(any::<i32>(), 0..128)) {
        let mut heap = MinHeap::new();
        for elem in &elems {
            heap.insert(*elem);
        }

        let mut sorted = elems.clone();
        sorted.sort_unstable();

        prop_assert_eq!(drain(&mut heap), sorted);
    }

    #[test]
    fn interleaved_operations_track_minimum(
        ops in prop::collection::vec(prop::option::of(-50i32..50), 0..96),
    ) {
        let mut heap = MinHeap::new();
        let mut model: Vec<i32> = Vec::new();

        // `Some` inserts, `None` extracts.
        for op in ops {
            match op {
                Some(elem) => {
                    heap.insert(elem);
                    model.push(elem);
                }
                None => {
                    let position = model
                        .iter()
                        .enumerate()
                        .min_by_key(|(_, e)| **e)
                        .map(|(i, _)| i);
                    let expected = position.map(|i| model.swap_remove(i)).ok_or(Error::Empty);
                    prop_assert_eq!(heap.extract_min(), expected);
                }
            }

            assert_heap_order(&heap);
            prop_assert_eq!(heap.len(), model.len());
        }
    }
}
