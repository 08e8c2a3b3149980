#![forbid(unsafe_code)]

//! Array-move primitive shared by the list engine and the board reducer.
//!
//! A move is "remove at `start`, then insert at `end` counted in the
//! post-removal sequence". Indices are clamped explicitly rather than relying
//! on collection leniency:
//!
//! - `start >= len` moves nothing.
//! - `end` is clamped to the post-removal length, so an oversized `end` appends.

/// Move one element within `items`, in place.
///
/// Returns `true` if the sequence changed.
pub fn move_item<T>(items: &mut Vec<T>, start: usize, end: usize) -> bool {
    if start >= items.len() {
        return false;
    }
    let end = end.min(items.len() - 1);
    if start == end {
        return false;
    }
    let item = items.remove(start);
    items.insert(end, item);
    true
}

/// Return a copy of `items` with the element at `start` relocated to `end`.
///
/// The input is left untouched. `reorder(reorder(xs, i, j), j, i) == xs` for
/// any in-range `i != j`.
///
/// ```
/// # use ftui_reorder::array::reorder;
/// assert_eq!(reorder(&["a", "b", "c"], 0, 2), ["b", "c", "a"]);
/// ```
#[must_use]
pub fn reorder<T: Clone>(items: &[T], start: usize, end: usize) -> Vec<T> {
    let mut out = items.to_vec();
    move_item(&mut out, start, end);
    out
}

#[cfg(test)]
mod tests {
    use super::{move_item, reorder};

    #[test]
    fn reorder_forward() {
        assert_eq!(reorder(&['a', 'b', 'c'], 0, 2), vec!['b', 'c', 'a']);
    }

    #[test]
    fn reorder_backward() {
        assert_eq!(reorder(&['a', 'b', 'c', 'd'], 3, 1), ['a', 'd', 'b', 'c']);
    }

    #[test]
    fn reorder_adjacent_swap() {
        assert_eq!(reorder(&[1, 2, 3], 1, 2), vec![1, 3, 2]);
        assert_eq!(reorder(&[1, 2, 3], 2, 1), vec![1, 3, 2]);
    }

    #[test]
    fn reorder_same_index_is_copy() {
        let xs = vec![1, 2, 3];
        assert_eq!(reorder(&xs, 1, 1), xs);
    }

    #[test]
    fn reorder_leaves_input_untouched() {
        let xs = vec!["x", "y", "z"];
        let _ = reorder(&xs, 0, 2);
        assert_eq!(xs, ["x", "y", "z"]);
    }

    #[test]
    fn reorder_round_trip() {
        let xs: Vec<u32> = (0..6).collect();
        for i in 0..6 {
            for j in 0..6 {
                let there = reorder(&xs, i, j);
                assert_eq!(reorder(&there, j, i), xs, "i={i} j={j}");
            }
        }
    }

    #[test]
    fn end_past_bounds_appends() {
        assert_eq!(reorder(&[1, 2, 3], 0, 99), vec![2, 3, 1]);
    }

    #[test]
    fn start_past_bounds_is_noop() {
        let mut xs = vec![1, 2, 3];
        assert!(!move_item(&mut xs, 3, 0));
        assert_eq!(xs, [1, 2, 3]);
    }

    #[test]
    fn empty_and_single() {
        let mut empty: Vec<u8> = Vec::new();
        assert!(!move_item(&mut empty, 0, 0));
        let mut one = vec![7];
        assert!(!move_item(&mut one, 0, 5));
        assert_eq!(one, [7]);
    }

    #[test]
    fn move_item_reports_change() {
        let mut xs = vec![1, 2, 3];
        assert!(move_item(&mut xs, 0, 1));
        assert_eq!(xs, [2, 1, 3]);
        assert!(!move_item(&mut xs, 2, 2));
    }
}
