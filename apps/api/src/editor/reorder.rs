use crate::editor::EditError;

/// Moves the element at `from` so it ends up at `to`: remove, then insert.
/// Both indices refer to the list as given.
pub fn move_item<T>(mut list: Vec<T>, from: usize, to: usize) -> Result<Vec<T>, EditError> {
    let len = list.len();
    if from >= len {
        return Err(EditError::IndexOutOfRange { index: from, len });
    }
    if to >= len {
        return Err(EditError::IndexOutOfRange { index: to, len });
    }

    let item = list.remove(from);
    list.insert(to, item);
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_first_to_last() {
        assert_eq!(move_item(vec!['A', 'B', 'C'], 0, 2), Ok(vec!['B', 'C', 'A']));
    }

    #[test]
    fn test_move_last_to_first() {
        assert_eq!(move_item(vec!['A', 'B', 'C'], 2, 0), Ok(vec!['C', 'A', 'B']));
    }

    #[test]
    fn test_move_in_place_is_noop() {
        assert_eq!(move_item(vec![1, 2, 3], 1, 1), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert_eq!(
            move_item(vec![1, 2], 2, 0),
            Err(EditError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            move_item(vec![1, 2], 0, 5),
            Err(EditError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert!(move_item(Vec::<u8>::new(), 0, 0).is_err());
    }
}
