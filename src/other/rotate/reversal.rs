rotate_impl!("reversal");

/// Three reversals, N swaps in total. Touches every element even if one block is tiny.
pub fn rotate<T>(arr: &mut [T], middle: usize) -> usize {
    let len = arr.len();
    if middle == 0 || middle == len {
        return len - middle;
    }

    arr[..middle].reverse();
    arr[middle..].reverse();
    arr.reverse();

    len - middle
}
