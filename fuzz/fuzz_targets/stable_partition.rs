#![no_main]

use libfuzzer_sys::fuzz_target;

use rotate_partition::stable_partition;

// The first byte picks the pivot and the start of the sub-range, the rest is the input.
fuzz_target!(|data: &[u8]| {
    let Some((&pivot, rest)) = data.split_first() else {
        return;
    };

    let mut v = rest.to_vec();
    let start = (pivot as usize).min(v.len());
    let end = v.len();

    let (mut expected_false, expected_true): (Vec<u8>, Vec<u8>) =
        v[start..].iter().partition(|&&val| val < pivot);
    let expected_boundary = start + expected_false.len();
    expected_false.extend(expected_true);

    let boundary = stable_partition(&mut v, start..end, |val| *val >= pivot);

    assert_eq!(boundary, expected_boundary);
    assert_eq!(&v[..start], &rest[..start]);
    assert_eq!(&v[start..], expected_false.as_slice());
});
