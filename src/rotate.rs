use std::ops::Range;

use crate::error;
use crate::sequence::Sequence;

pub struct RotateImpl;

impl partition_test_tools::Rotate for RotateImpl {
    fn name() -> String {
        "block_swap_rotate".into()
    }

    #[inline]
    fn rotate<T>(arr: &mut [T], middle: usize) -> usize {
        let len = arr.len();
        rotate(arr, 0..len, middle)
    }
}

/// Rearranges `range` so that the elements originally in `middle..range.end` come first,
/// followed by the elements originally in `range.start..middle`. The relative order inside both
/// blocks is preserved.
///
/// Returns the new position of the element that was originally at `range.start`. If `middle` is
/// one of the range edges nothing moves, and the opposite edge is returned.
///
/// O(N) swaps, no allocation.
///
/// # Panics
///
/// Panics if `range` does not fit `seq`, or `middle` is outside of `range.start..=range.end`.
#[track_caller]
pub fn rotate<S: Sequence + ?Sized>(seq: &mut S, range: Range<usize>, middle: usize) -> usize {
    error::expect_valid(error::check_rotation(seq.len(), &range, middle));

    rotate_unchecked(seq, range, middle)
}

/// Same as [`rotate`] but only debug checks the preconditions. Used by the partitioning
/// recursion, which derives all its ranges from an already validated one.
pub(crate) fn rotate_unchecked<S: Sequence + ?Sized>(
    seq: &mut S,
    range: Range<usize>,
    middle: usize,
) -> usize {
    let Range { start, end } = range;
    debug_assert!(start <= middle && middle <= end && end <= seq.len());

    if middle == start {
        return end;
    }
    if middle == end {
        return start;
    }

    // Each round swaps the shorter block into its final place and leaves a smaller rotation of
    // the same kind in `s..end` around `m`.
    let (mut s, mut m) = (start, middle);
    let mut new_first_pos = None;

    loop {
        let (lhs_reached, rhs_reached) = swap_blocks(seq, s..m, m..end);

        if rhs_reached == end {
            // The first time the right block runs out, the original first element has just been
            // moved to its final position.
            let pos = *new_first_pos.get_or_insert(lhs_reached);
            if lhs_reached == m {
                return pos;
            }
        }

        if lhs_reached == m {
            m = rhs_reached;
        }
        s = lhs_reached;
    }
}

/// Swaps `lhs.start + i` with `rhs.start + i` for increasing `i` until one of the two blocks is
/// exhausted. Returns the positions reached in `lhs` and `rhs`, at least one of which equals the
/// end of its block.
///
/// Both blocks must be non-empty and `lhs` must lie before `rhs`.
#[inline]
pub(crate) fn swap_blocks<S: Sequence + ?Sized>(
    seq: &mut S,
    lhs: Range<usize>,
    rhs: Range<usize>,
) -> (usize, usize) {
    debug_assert!(!lhs.is_empty() && !rhs.is_empty());
    debug_assert!(lhs.end <= rhs.start);

    let (mut l, mut r) = (lhs.start, rhs.start);
    loop {
        seq.swap(l, r);
        l += 1;
        r += 1;

        if l == lhs.end || r == rhs.end {
            return (l, r);
        }
    }
}
