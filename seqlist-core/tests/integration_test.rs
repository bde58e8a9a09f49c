//! Integration tests for the reference walkthroughs of both containers

use seqlist_core::{
    compat::{index_or_sentinel, value_or_sentinel, INVALID_VALUE},
    ArrayList, ContainerKind, LinkedList, ListError, PositionalList,
};

#[test]
fn test_array_walkthrough() {
    let mut list = ArrayList::new();

    // Step 1: push 0..49 and record every capacity change
    let mut capacities = vec![list.capacity()];
    for i in 0..50 {
        list.push_back(i).unwrap();
        if list.capacity() != *capacities.last().unwrap() {
            capacities.push(list.capacity());
        }
    }
    assert_eq!(capacities, [10, 15, 22, 33, 49, 73]);
    assert_eq!(list.len(), 50);

    // Step 2: pop back down to ten elements
    while list.len() > 10 {
        list.pop_back();
    }
    assert_eq!(list.capacity(), 73);
    assert_eq!(list.dump(), "[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]\n");

    // Step 3: insert at front, back and index 1
    list.insert(0, 100).unwrap();
    list.insert(list.len(), 200).unwrap();
    list.insert(1, 300).unwrap();
    assert_eq!(
        list.to_string(),
        "[100, 300, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 200]"
    );

    // Step 4: erase index 1, front and back
    assert_eq!(list.erase(1).unwrap(), 300);
    assert_eq!(list.erase(0).unwrap(), 100);
    assert_eq!(list.erase(list.len() - 1).unwrap(), 200);
    assert_eq!(list.to_string(), "[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]");

    // Step 5: shrink to fit, then shrink an emptied list
    list.shrink_to_fit().unwrap();
    assert_eq!((list.len(), list.capacity()), (10, 10));
    list.clear();
    list.shrink_to_fit().unwrap();
    assert_eq!((list.len(), list.capacity()), (0, 0));

    // Step 6: refill and clear
    for _ in 0..20 {
        list.insert(list.len(), 0).unwrap();
    }
    assert_eq!((list.len(), list.capacity()), (20, 22));
    list.clear();
    assert_eq!((list.len(), list.capacity()), (0, 22));
    assert_eq!(list.dump(), "[]\n");
}

#[test]
fn test_array_insert_erase_on_empty() {
    let mut list = ArrayList::new();
    list.insert(0, 100).unwrap();
    assert_eq!(list.to_string(), "[100]");
    assert_eq!(list.erase(0).unwrap(), 100);
    assert_eq!(list.to_string(), "[]");
}

#[test]
fn test_array_errors_carry_exit_codes() {
    let mut list = ArrayList::new();
    let err = list.get(0).unwrap_err();
    assert!(matches!(err, ListError::IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(err.exit_code(), 1);

    let alloc_err = list.set_capacity(usize::MAX).unwrap_err();
    assert!(matches!(alloc_err, ListError::Allocation { .. }));
    assert_eq!(alloc_err.exit_code(), 2);
    // Failed reallocation leaves the list usable.
    assert_eq!(list.capacity(), 10);
    list.push_back(1).unwrap();
}

#[test]
fn test_linked_walkthrough() {
    let mut list = LinkedList::new();
    list.add(0, 100).unwrap();
    list.add(1, 200).unwrap();
    list.add(1, 300).unwrap();
    assert_eq!(list.dump(), "[100, 300, 200]\n");

    assert_eq!(list.front(), Some(100));
    assert_eq!(list.rear(), Some(200));

    assert_eq!(list.remove_node(1).unwrap(), 300);
    assert_eq!(list.to_string(), "[100, 200]");

    list.enqueue(400).unwrap();
    assert_eq!(list.dequeue(), Some(100));
    assert_eq!(list.to_string(), "[200, 400]");
    assert_eq!(list.front(), Some(200));
    assert_eq!(list.rear(), Some(400));
}

#[test]
fn test_linked_invalid_index_is_reported() {
    let mut list = LinkedList::from_slice(&[1, 2]).unwrap();
    assert!(list.add(5, 9).is_err());
    assert_eq!(list.to_string(), "[1, 2]");
    assert_eq!(value_or_sentinel(list.get(2)), INVALID_VALUE);
    assert_eq!(index_or_sentinel(list.index_of(9)), -1);
}

#[test]
fn test_both_containers_agree_through_trait() {
    let mut array = ArrayList::new();
    let mut linked = LinkedList::new();
    let lists: [&mut dyn PositionalList; 2] = [&mut array, &mut linked];

    for list in lists {
        list.append(3).unwrap();
        list.insert_at(0, 1).unwrap();
        list.insert_at(1, 2).unwrap();
        list.append(2).unwrap();
        assert_eq!(list.to_vec(), vec![1, 2, 3, 2]);
        assert_eq!(list.index_of(2), Some(1));
        assert_eq!(list.last_index_of(2), Some(3));
        assert_eq!(list.set_at(0, 10).unwrap(), 1);
        assert_eq!(list.remove_at(3).unwrap(), 2);
        assert_eq!(list.get_at(0).unwrap(), 10);
        assert!(list.get_at(3).is_err());
    }

    assert_eq!(array.snapshot().elements, linked.snapshot().elements);
    assert_eq!(array.snapshot().kind, ContainerKind::Array);
    assert_eq!(linked.snapshot().kind, ContainerKind::Linked);
    assert_eq!(linked.snapshot().capacity, None);
}
