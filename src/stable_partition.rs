use std::convert::Infallible;
use std::ops::Range;

use crate::error;
use crate::rotate::rotate_unchecked;
use crate::sequence::Sequence;

pub struct StablePartitionImpl;

impl partition_test_tools::StablePartition for StablePartitionImpl {
    fn name() -> String {
        "rotate_stable_partition".into()
    }

    #[inline]
    fn stable_partition<T, F>(arr: &mut [T], pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let len = arr.len();
        stable_partition(arr, 0..len, pred)
    }

    #[inline]
    fn stable_partition_by_index<T, F>(arr: &mut [T], pred: F) -> usize
    where
        F: FnMut(usize) -> bool,
    {
        let len = arr.len();
        stable_partition_by_index(arr, 0..len, pred)
    }
}

/// Decides on which side of the partition boundary the element at a position belongs.
///
/// The partitioning recursion asks about every position of the range exactly once, in ascending
/// order, and always before any rotation has moved the element at that position. A strategy can
/// therefore key its answer on the position alone without looking at the element.
pub trait Classify<S: Sequence + ?Sized, E> {
    /// Returns `true` if the element at `pos` belongs behind the boundary.
    fn classify(&mut self, seq: &S, pos: usize) -> Result<bool, E>;
}

/// Classifies by looking at the element value.
pub struct ByValue<F>(pub F);

impl<S, F, E> Classify<S, E> for ByValue<F>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> Result<bool, E>,
{
    #[inline]
    fn classify(&mut self, seq: &S, pos: usize) -> Result<bool, E> {
        (self.0)(seq.get(pos))
    }
}

/// Classifies by original position only, the element is never read.
pub struct ByIndex<F>(pub F);

impl<S, F, E> Classify<S, E> for ByIndex<F>
where
    S: Sequence + ?Sized,
    F: FnMut(usize) -> Result<bool, E>,
{
    #[inline]
    fn classify(&mut self, _seq: &S, pos: usize) -> Result<bool, E> {
        (self.0)(pos)
    }
}

/// Reorders `range` so that all elements for which `pred` returns `false` precede all elements
/// for which it returns `true`. The relative order inside both groups is preserved.
///
/// Returns the boundary: every element in `range.start..boundary` failed `pred`, every element
/// in `boundary..range.end` passed it.
///
/// `pred` is called exactly once per element. O(N * log(N)) swaps, O(log(N)) stack and no heap
/// allocation. If `pred` panics all original elements remain in `seq`, in unspecified order.
///
/// # Panics
///
/// Panics if `range` does not fit `seq`.
#[track_caller]
pub fn stable_partition<S, F>(seq: &mut S, range: Range<usize>, mut pred: F) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    unwrap_infallible(try_stable_partition(seq, range, |elem| {
        Ok::<_, Infallible>(pred(elem))
    }))
}

/// Same as [`stable_partition`] but `pred` is called with the original position of each element
/// instead of the element itself.
#[track_caller]
pub fn stable_partition_by_index<S, F>(seq: &mut S, range: Range<usize>, mut pred: F) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(usize) -> bool,
{
    unwrap_infallible(try_stable_partition_by_index(seq, range, |pos| {
        Ok::<_, Infallible>(pred(pos))
    }))
}

/// Fallible version of [`stable_partition`].
///
/// The first `Err` returned by `pred` is handed back unmodified and no further elements are
/// classified. `seq` still holds all of its original elements, but `range` is in no particular
/// order.
#[track_caller]
pub fn try_stable_partition<S, F, E>(seq: &mut S, range: Range<usize>, pred: F) -> Result<usize, E>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> Result<bool, E>,
{
    stable_partition_with(seq, range, &mut ByValue(pred))
}

/// Fallible version of [`stable_partition_by_index`].
#[track_caller]
pub fn try_stable_partition_by_index<S, F, E>(
    seq: &mut S,
    range: Range<usize>,
    pred: F,
) -> Result<usize, E>
where
    S: Sequence + ?Sized,
    F: FnMut(usize) -> Result<bool, E>,
{
    stable_partition_with(seq, range, &mut ByIndex(pred))
}

/// Stable partition driven by an arbitrary [`Classify`] strategy. All other partition functions
/// are thin wrappers around this one.
#[track_caller]
pub fn stable_partition_with<S, C, E>(
    seq: &mut S,
    range: Range<usize>,
    classify: &mut C,
) -> Result<usize, E>
where
    S: Sequence + ?Sized,
    C: Classify<S, E>,
{
    error::expect_valid(error::check_range(seq.len(), &range));

    partition_recursive(seq, range, classify)
}

fn partition_recursive<S, C, E>(
    seq: &mut S,
    range: Range<usize>,
    classify: &mut C,
) -> Result<usize, E>
where
    S: Sequence + ?Sized,
    C: Classify<S, E>,
{
    let len = range.len();

    match len {
        0 => Ok(range.start),
        1 => {
            if classify.classify(seq, range.start)? {
                Ok(range.start)
            } else {
                Ok(range.end)
            }
        }
        _ => {
            // Rounding down keeps the left half the smaller one for odd lengths.
            let mid = range.start + len / 2;

            let left_boundary = partition_recursive(seq, range.start..mid, classify)?;
            let right_boundary = partition_recursive(seq, mid..range.end, classify)?;

            // left_boundary..mid holds the left half's `true` elements and mid..right_boundary the
            // right half's `false` elements. Swapping the two blocks joins both groups.
            Ok(rotate_unchecked(seq, left_boundary..right_boundary, mid))
        }
    }
}

#[inline]
fn unwrap_infallible<T>(res: Result<T, Infallible>) -> T {
    match res {
        Ok(val) => val,
        Err(never) => match never {},
    }
}
