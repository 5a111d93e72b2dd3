#![no_main]

use libfuzzer_sys::fuzz_target;

use rotate_partition::rotate;

// The first byte picks the rotation point.
fuzz_target!(|data: &[u8]| {
    let Some((&middle, rest)) = data.split_first() else {
        return;
    };

    let mut v = rest.to_vec();
    let middle = (middle as usize).min(v.len());

    let mut expected = v.clone();
    expected.rotate_left(middle);

    let expected_pos = if middle == 0 {
        rest.len()
    } else {
        rest.len() - middle
    };

    assert_eq!(rotate(&mut v, 0..rest.len(), middle), expected_pos);
    assert_eq!(v, expected);
});
