partition_point_impl!("branchless_clean");

pub fn partition_point<T, P>(arr: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    // There are arr.len() + 1 possible outcomes of our search.
    // Invariant: [i+1, i+1+n) contains our desired result.
    let mut n = arr.len() + 1;
    let mut i = usize::MAX;

    while n > 1 {
        // n only ever shrinks by floor(n/2), so it ends at exactly 1 and mid stays below
        // arr.len().
        let mid = i.wrapping_add(n / 2);

        // [i+1, i+1+n-floor(n/2)) and [i+1+floor(n/2), i+1+n) together cover the current
        // range. A `false` at mid means the result lies in the latter.
        i = core::hint::black_box(if pred(&arr[mid]) { i } else { mid });
        n -= n / 2;
    }

    i.wrapping_add(1)
}
