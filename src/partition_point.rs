use std::ops::Range;

use crate::error;
use crate::sequence::Sequence;

pub struct PartitionPointImpl;

impl partition_test_tools::PartitionPoint for PartitionPointImpl {
    fn name() -> String {
        "binary_partition_point".into()
    }

    #[inline]
    fn partition_point<T, F>(arr: &[T], pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        partition_point(arr, 0..arr.len(), pred)
    }
}

pub struct PartitionPointLinearImpl;

impl partition_test_tools::PartitionPoint for PartitionPointLinearImpl {
    fn name() -> String {
        "linear_partition_point".into()
    }

    #[inline]
    fn partition_point<T, F>(arr: &[T], pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        partition_point_linear(arr, 0..arr.len(), pred)
    }
}

/// Returns the position of the first element in `range` for which `pred` returns `true`, or
/// `range.end` if there is none.
///
/// `range` has to be partitioned by `pred` already, all `false` elements before all `true`
/// elements, as left behind by [`crate::stable_partition`]. This is not checked. For input that
/// is not partitioned the result is some position in `range.start..=range.end`.
///
/// Binary search with O(log(N)) calls to `pred` if `S::RANDOM_ACCESS`, otherwise a single linear
/// pass.
///
/// # Panics
///
/// Panics if `range` does not fit `seq`.
#[track_caller]
pub fn partition_point<S, F>(seq: &S, range: Range<usize>, pred: F) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    error::expect_valid(error::check_range(seq.len(), &range));

    if S::RANDOM_ACCESS {
        binary_search(seq, range, pred)
    } else {
        linear_scan(seq, range, pred)
    }
}

/// Same as [`partition_point`] but always walks the range front to back. Stops at the first
/// element for which `pred` returns `true`.
#[track_caller]
pub fn partition_point_linear<S, F>(seq: &S, range: Range<usize>, pred: F) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    error::expect_valid(error::check_range(seq.len(), &range));

    linear_scan(seq, range, pred)
}

fn binary_search<S, F>(seq: &S, range: Range<usize>, mut pred: F) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    // Invariant: the result lies in low..=low + len.
    let mut low = range.start;
    let mut len = range.len();

    while len > 0 {
        let half = len / 2;
        let mid = low + half;

        if pred(seq.get(mid)) {
            len = half;
        } else {
            low = mid + 1;
            len -= half + 1;
        }
    }

    low
}

fn linear_scan<S, F>(seq: &S, range: Range<usize>, mut pred: F) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    let end = range.end;
    range.into_iter().find(|&pos| pred(seq.get(pos))).unwrap_or(end)
}
