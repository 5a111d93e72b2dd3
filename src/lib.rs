//! In-place stable partitioning built on block swap rotation.
//!
//! Everything works on positions of a [`Sequence`], a mutable collection with indexed read and
//! swap access. Slices, arrays, `Vec` and `VecDeque` implement it out of the box. None of the
//! algorithms allocate.

macro_rules! rotate_impl {
    ($name:expr) => {
        pub struct RotateImpl;

        impl partition_test_tools::Rotate for RotateImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn rotate<T>(arr: &mut [T], middle: usize) -> usize {
                rotate(arr, middle)
            }
        }
    };
}

macro_rules! stable_partition_impl {
    ($name:expr) => {
        pub struct StablePartitionImpl;

        impl partition_test_tools::StablePartition for StablePartitionImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn stable_partition<T, F>(arr: &mut [T], pred: F) -> usize
            where
                F: FnMut(&T) -> bool,
            {
                stable_partition(arr, pred)
            }

            #[inline]
            fn stable_partition_by_index<T, F>(arr: &mut [T], pred: F) -> usize
            where
                F: FnMut(usize) -> bool,
            {
                stable_partition_by_index(arr, pred)
            }
        }
    };
}

macro_rules! partition_point_impl {
    ($name:expr) => {
        pub struct PartitionPointImpl;

        impl partition_test_tools::PartitionPoint for PartitionPointImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn partition_point<T, F>(arr: &[T], pred: F) -> usize
            where
                F: FnMut(&T) -> bool,
            {
                partition_point(arr, pred)
            }
        }
    };
}

pub mod error;
pub mod ext;
pub mod partition_point;
pub mod rotate;
pub mod sequence;
pub mod stable_partition;

// Simpler or allocating versions of the same operations, used as test oracles and benchmark
// baselines.
pub mod other;

pub use error::{check_range, check_rotation, RangeError};
pub use ext::SequenceExt;
pub use partition_point::{partition_point, partition_point_linear};
pub use rotate::rotate;
pub use sequence::Sequence;
pub use stable_partition::{
    stable_partition, stable_partition_by_index, stable_partition_with, try_stable_partition,
    try_stable_partition_by_index, ByIndex, ByValue, Classify,
};
