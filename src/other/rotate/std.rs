rotate_impl!("std");

pub fn rotate<T>(arr: &mut [T], middle: usize) -> usize {
    arr.rotate_left(middle);

    if middle == 0 {
        arr.len()
    } else {
        arr.len() - middle
    }
}
