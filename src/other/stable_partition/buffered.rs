stable_partition_impl!("buffered");

pub fn stable_partition<T, F>(arr: &mut [T], mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let flags = arr.iter().map(|elem| pred(elem)).collect::<Vec<bool>>();
    apply_flags(arr, &flags)
}

pub fn stable_partition_by_index<T, F>(arr: &mut [T], pred: F) -> usize
where
    F: FnMut(usize) -> bool,
{
    let flags = (0..arr.len()).map(pred).collect::<Vec<bool>>();
    apply_flags(arr, &flags)
}

fn apply_flags<T>(arr: &mut [T], flags: &[bool]) -> usize {
    debug_assert_eq!(arr.len(), flags.len());

    let false_count = flags.iter().filter(|flag| !**flag).count();

    // dest[i] is the final position of the element currently at i.
    let (mut next_false, mut next_true) = (0, false_count);
    let mut dest = flags
        .iter()
        .map(|&flag| {
            let slot = if flag { &mut next_true } else { &mut next_false };
            *slot += 1;
            *slot - 1
        })
        .collect::<Vec<usize>>();

    // Every swap puts one element into its final place, at most N - 1 swaps.
    for i in 0..arr.len() {
        while dest[i] != i {
            let j = dest[i];
            arr.swap(i, j);
            dest.swap(i, j);
        }
    }

    false_count
}
