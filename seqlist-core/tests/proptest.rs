//! Property-based tests using proptest

use proptest::prelude::*;
use seqlist_core::{constants::grow_capacity, ArrayList, LinkedList, Value};

/// Smallest capacity of the growth sequence that holds `n` elements
fn expected_capacity(n: usize) -> usize {
    let mut cap = 10;
    while cap < n {
        cap = grow_capacity(cap);
    }
    cap
}

#[derive(Debug, Clone)]
enum Op {
    Insert(usize, Value),
    Remove(usize),
    Set(usize, Value),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<usize>(), any::<Value>()).prop_map(|(i, v)| Op::Insert(i, v)),
        any::<usize>().prop_map(Op::Remove),
        (any::<usize>(), any::<Value>()).prop_map(|(i, v)| Op::Set(i, v)),
    ]
}

proptest! {
    #[test]
    fn prop_push_back_appends(values in prop::collection::vec(any::<Value>(), 0..200)) {
        let mut list = ArrayList::new();
        for (i, &v) in values.iter().enumerate() {
            list.push_back(v).unwrap();
            prop_assert_eq!(list.len(), i + 1);
        }
        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(list.get(i).unwrap(), v);
        }
    }

    #[test]
    fn prop_capacity_follows_growth_policy(n in 0usize..500) {
        let mut list = ArrayList::new();
        for i in 0..n {
            list.push_back(i as Value).unwrap();
        }
        prop_assert_eq!(list.capacity(), expected_capacity(n));
    }

    #[test]
    fn prop_insert_then_erase_is_identity(
        values in prop::collection::vec(any::<Value>(), 0..64),
        index in any::<prop::sample::Index>(),
        value in any::<Value>()
    ) {
        let mut list = ArrayList::from_slice(&values).unwrap();
        let index = index.index(values.len() + 1);
        list.insert(index, value).unwrap();
        prop_assert_eq!(list.erase(index).unwrap(), value);
        prop_assert_eq!(list.as_slice(), &values[..]);
    }

    #[test]
    fn prop_shrink_to_fit_matches_size(
        values in prop::collection::vec(any::<Value>(), 0..64),
        pops in 0usize..64
    ) {
        let mut list = ArrayList::new();
        for &v in &values {
            list.push_back(v).unwrap();
        }
        for _ in 0..pops {
            list.pop_back();
        }
        list.shrink_to_fit().unwrap();
        prop_assert_eq!(list.capacity(), list.len());
    }

    #[test]
    fn prop_queue_is_fifo(values in prop::collection::vec(any::<Value>(), 0..64)) {
        let mut list = LinkedList::new();
        for &v in &values {
            list.enqueue(v).unwrap();
            prop_assert_eq!(list.rear(), Some(v));
            prop_assert_eq!(list.front(), values.first().copied());
        }
        let drained: Vec<Value> = std::iter::from_fn(|| list.dequeue()).collect();
        prop_assert_eq!(drained, values);
        prop_assert!(list.is_empty());
    }

    #[test]
    fn prop_containers_match_vec_model(ops in prop::collection::vec(op_strategy(), 0..128)) {
        let mut array = ArrayList::new();
        let mut linked = LinkedList::new();
        let mut model: Vec<Value> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(i, v) => {
                    let index = i % (model.len() + 1);
                    array.insert(index, v).unwrap();
                    linked.add(index, v).unwrap();
                    model.insert(index, v);
                }
                Op::Remove(i) if !model.is_empty() => {
                    let index = i % model.len();
                    let expected = model.remove(index);
                    prop_assert_eq!(array.erase(index).unwrap(), expected);
                    prop_assert_eq!(linked.remove_node(index).unwrap(), expected);
                }
                Op::Set(i, v) if !model.is_empty() => {
                    let index = i % model.len();
                    let expected = std::mem::replace(&mut model[index], v);
                    prop_assert_eq!(array.set(index, v).unwrap(), expected);
                    prop_assert_eq!(linked.set(index, v).unwrap(), expected);
                }
                Op::Remove(i) | Op::Set(i, _) => {
                    prop_assert!(array.erase(i).is_err());
                    prop_assert!(linked.remove_node(i).is_err());
                }
            }

            prop_assert_eq!(array.as_slice(), &model[..]);
            prop_assert_eq!(linked.len(), model.len());
            prop_assert_eq!(linked.front(), model.first().copied());
            prop_assert_eq!(linked.rear(), model.last().copied());
        }

        let rendered: Vec<Value> = linked.iter().copied().collect();
        prop_assert_eq!(&rendered, &model);
        for (i, &v) in model.iter().enumerate() {
            prop_assert_eq!(linked.get(i).unwrap(), v);
        }
        prop_assert_eq!(array.to_string(), linked.to_string());
    }

    #[test]
    fn prop_index_searches_agree(values in prop::collection::vec(-4i32..4, 0..32), needle in -4i32..4) {
        let array = ArrayList::from_slice(&values).unwrap();
        let linked = LinkedList::from_slice(&values).unwrap();
        let first = values.iter().position(|&v| v == needle);
        let last = values.iter().rposition(|&v| v == needle);

        prop_assert_eq!(array.index_of(needle), first);
        prop_assert_eq!(linked.index_of(needle), first);
        prop_assert_eq!(array.last_index_of(needle), last);
        prop_assert_eq!(linked.last_index_of(needle), last);
        prop_assert_eq!(linked.contains(needle), first.is_some());
    }
}
