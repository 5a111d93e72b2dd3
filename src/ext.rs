use crate::partition_point::partition_point;
use crate::rotate::rotate;
use crate::sequence::Sequence;
use crate::stable_partition::{stable_partition, stable_partition_by_index, try_stable_partition};

/// Whole-sequence shorthands for the range based functions.
///
/// Method names differ from the inherent slice methods so that they are not shadowed on `[T]`
/// and `Vec<T>`.
pub trait SequenceExt: Sequence {
    /// See [`rotate`](crate::rotate::rotate).
    #[track_caller]
    fn rotate_at(&mut self, middle: usize) -> usize {
        let len = self.len();
        rotate(self, 0..len, middle)
    }

    /// See [`stable_partition`](crate::stable_partition::stable_partition).
    fn stable_partition_by<F>(&mut self, pred: F) -> usize
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let len = self.len();
        stable_partition(self, 0..len, pred)
    }

    /// See [`stable_partition_by_index`](crate::stable_partition::stable_partition_by_index).
    fn stable_partition_by_position<F>(&mut self, pred: F) -> usize
    where
        F: FnMut(usize) -> bool,
    {
        let len = self.len();
        stable_partition_by_index(self, 0..len, pred)
    }

    /// See [`try_stable_partition`](crate::stable_partition::try_stable_partition).
    fn try_stable_partition_by<F, E>(&mut self, pred: F) -> Result<usize, E>
    where
        F: FnMut(&Self::Item) -> Result<bool, E>,
    {
        let len = self.len();
        try_stable_partition(self, 0..len, pred)
    }

    /// See [`partition_point`](crate::partition_point::partition_point).
    fn partitioning_index<F>(&self, pred: F) -> usize
    where
        F: FnMut(&Self::Item) -> bool,
    {
        partition_point(self, 0..self.len(), pred)
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}
