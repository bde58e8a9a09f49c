//! Fuzzing harness for seqlist-core containers
//!
//! Each input byte stream is decoded into a sequence of operations and
//! applied both to a container and to a `Vec` model. Any divergence panics,
//! which the fuzzer reports as a crash.
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_array_ops

use seqlist_core::{ArrayList, LinkedList, Value};

/// Decode one op from a 3-byte window: opcode, index byte, value byte
fn decode(chunk: &[u8]) -> (u8, usize, Value) {
    let opcode = chunk[0] % 6;
    let index = chunk.get(1).copied().unwrap_or(0) as usize;
    let value = chunk.get(2).copied().unwrap_or(0) as i8 as Value;
    (opcode, index, value)
}

/// Drive an `ArrayList` from `data` and check it against a `Vec`
pub fn fuzz_array_ops(data: &[u8]) {
    let mut list = ArrayList::new();
    let mut model: Vec<Value> = Vec::new();

    for chunk in data.chunks(3) {
        let (opcode, index, value) = decode(chunk);
        match opcode {
            0 => {
                list.push_back(value).unwrap();
                model.push(value);
            }
            1 => assert_eq!(list.pop_back(), model.pop()),
            2 => {
                let ok = list.insert(index, value).is_ok();
                assert_eq!(ok, index <= model.len());
                if ok {
                    model.insert(index, value);
                }
            }
            3 => match list.erase(index) {
                Ok(v) => assert_eq!(v, model.remove(index)),
                Err(_) => assert!(index >= model.len()),
            },
            4 => {
                // Capacity changes may truncate.
                list.set_capacity(index).unwrap();
                model.truncate(index);
                assert_eq!(list.capacity(), index);
            }
            _ => {
                list.shrink_to_fit().unwrap();
                assert_eq!(list.capacity(), model.len());
            }
        }
        assert_eq!(list.as_slice(), &model[..]);
    }
}

/// Drive a `LinkedList` from `data` and check it against a `Vec`
pub fn fuzz_linked_ops(data: &[u8]) {
    let mut list = LinkedList::new();
    let mut model: Vec<Value> = Vec::new();

    for chunk in data.chunks(3) {
        let (opcode, index, value) = decode(chunk);
        match opcode {
            0 => {
                list.enqueue(value).unwrap();
                model.push(value);
            }
            1 => {
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(list.dequeue(), expected);
            }
            2 => {
                let ok = list.add(index, value).is_ok();
                assert_eq!(ok, index <= model.len());
                if ok {
                    model.insert(index, value);
                }
            }
            3 => match list.remove_node(index) {
                Ok(v) => assert_eq!(v, model.remove(index)),
                Err(_) => assert!(index >= model.len()),
            },
            4 => match list.set(index, value) {
                Ok(v) => assert_eq!(v, std::mem::replace(&mut model[index], value)),
                Err(_) => assert!(index >= model.len()),
            },
            _ => {
                assert_eq!(list.index_of(value), model.iter().position(|&v| v == value));
                assert_eq!(
                    list.last_index_of(value),
                    model.iter().rposition(|&v| v == value)
                );
            }
        }
        assert_eq!(list.len(), model.len());
        assert_eq!(list.front(), model.first().copied());
        assert_eq!(list.rear(), model.last().copied());
    }

    assert!(list.iter().copied().eq(model.iter().copied()));
}
