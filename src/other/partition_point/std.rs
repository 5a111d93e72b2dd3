partition_point_impl!("std");

pub fn partition_point<T, P>(arr: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    // The std predicate is true on the prefix, ours on the suffix.
    arr.partition_point(|elem| !pred(elem))
}
