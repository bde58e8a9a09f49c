//! Legacy sentinel conventions
//!
//! The container API reports absence with `Option` and failure with
//! `Result`. Callers that still expect the integer conventions (`-1` for a
//! missing index, `i32::MIN` for an invalid access) can map results through
//! these helpers. Note that `INVALID_VALUE` is also a storable value, so the
//! mapping is lossy.

use crate::error::ListError;
use crate::types::Value;

/// Index reported when a search finds nothing
pub const NOT_FOUND: i64 = -1;

/// Value reported for an invalid index or an empty list
pub const INVALID_VALUE: Value = Value::MIN;

/// Map a search result to its index or [`NOT_FOUND`]
pub fn index_or_sentinel(index: Option<usize>) -> i64 {
    index.map_or(NOT_FOUND, |i| i as i64)
}

/// Map an access result to its value or [`INVALID_VALUE`]
pub fn value_or_sentinel(result: Result<Value, ListError>) -> Value {
    result.unwrap_or(INVALID_VALUE)
}

/// Map an optional value (`front`, `rear`, `dequeue`) to the value or [`INVALID_VALUE`]
pub fn opt_value_or_sentinel(value: Option<Value>) -> Value {
    value.unwrap_or(INVALID_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinkedList;

    #[test]
    fn test_index_sentinel() {
        assert_eq!(index_or_sentinel(Some(4)), 4);
        assert_eq!(index_or_sentinel(None), -1);
    }

    #[test]
    fn test_value_sentinel_collides_with_stored_min() {
        let mut list = LinkedList::new();
        list.enqueue(i32::MIN).unwrap();

        let stored = value_or_sentinel(list.get(0));
        let missing = value_or_sentinel(list.get(1));
        assert_eq!(stored, missing);
        assert!(list.get(0).is_ok() && list.get(1).is_err());
    }

    #[test]
    fn test_empty_queue_sentinels() {
        let list = LinkedList::new();
        assert_eq!(opt_value_or_sentinel(list.front()), INVALID_VALUE);
        assert_eq!(opt_value_or_sentinel(list.rear()), INVALID_VALUE);
    }
}
