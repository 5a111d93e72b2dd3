//! Interfaces every implementation under test provides. The generic test functions in
//! [`tests`] are written against these, so the same suite runs for the in-place algorithms and
//! the reference implementations alike.

pub trait Rotate {
    fn name() -> String;

    /// Rotates `arr` so that `arr[middle]` becomes the first element. Returns the new position
    /// of the element that was originally first.
    fn rotate<T>(arr: &mut [T], middle: usize) -> usize;
}

pub trait StablePartition {
    fn name() -> String;

    /// Moves all elements for which `pred` returns true behind all elements for which it
    /// returns false, preserving the relative order inside both groups. Returns the boundary.
    fn stable_partition<T, F>(arr: &mut [T], pred: F) -> usize
    where
        F: FnMut(&T) -> bool;

    /// Same as `stable_partition` but `pred` is called with the original position of each
    /// element instead of the element itself.
    fn stable_partition_by_index<T, F>(arr: &mut [T], pred: F) -> usize
    where
        F: FnMut(usize) -> bool;
}

pub trait PartitionPoint {
    fn name() -> String;

    /// Returns the position of the first element for which `pred` returns true, assuming `arr`
    /// is already partitioned by `pred`.
    fn partition_point<T, F>(arr: &[T], pred: F) -> usize
    where
        F: FnMut(&T) -> bool;
}

pub mod patterns;
pub mod tests;
