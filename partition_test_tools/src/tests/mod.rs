use std::env;
use std::fmt::Debug;
use std::fs;
use std::io::{self, Write};
use std::sync::Mutex;

use crate::patterns;


#[cfg(miri)]
const TEST_SIZES: [usize; 18] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 15, 20, 24, 33, 50, 100, 280, 400,
];

#[cfg(feature = "large_test_sizes")]
#[cfg(not(miri))]
const TEST_SIZES: [usize; 30] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100, 200, 500, 1_000,
    2_048, 5_000, 10_000, 100_000, 1_000_000,
];

#[cfg(not(feature = "large_test_sizes"))]
#[cfg(not(miri))]
const TEST_SIZES: [usize; 28] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100, 200, 500, 1_000,
    2_048, 5_000, 10_000,
];

fn get_or_init_random_seed(impl_name: &str) -> u64 {
    static SEED_WRITTEN: Mutex<bool> = Mutex::new(false);
    let seed = patterns::random_init_seed();

    let mut seed_writer = SEED_WRITTEN.lock().unwrap();
    if !*seed_writer {
        // Always write the seed before doing anything to ensure reproducibility of crashes.
        io::stdout()
            .write_all(format!("\nSeed: {seed}\nTesting: {impl_name}\n\n").as_bytes())
            .unwrap();
        io::stdout().flush().unwrap();

        *seed_writer = true;
    }

    seed
}

/// Panics if `got` and `expected` differ, after dumping enough information to reproduce the
/// failure.
fn assert_same_order<T: PartialEq + Debug>(
    seed: u64,
    original: &[T],
    expected: &[T],
    got: &[T],
) {
    assert_eq!(expected.len(), got.len());

    let is_small_test = got.len() <= 100;

    for (a, b) in expected.iter().zip(got.iter()) {
        if a != b {
            if is_small_test {
                eprintln!("Original: {:?}", original);
                eprintln!("Expected: {:?}", expected);
                eprintln!("Got:      {:?}", got);
            } else if env::var("WRITE_LARGE_FAILURE").is_ok() {
                // Large arrays output them as files.
                let original_name = format!("original_{}.txt", seed);
                let expected_name = format!("expected_{}.txt", seed);
                let got_name = format!("got_{}.txt", seed);

                fs::write(&original_name, format!("{:?}", original)).unwrap();
                fs::write(&expected_name, format!("{:?}", expected)).unwrap();
                fs::write(&got_name, format!("{:?}", got)).unwrap();

                eprintln!(
                    "Failed comparison, see files {original_name}, {expected_name}, and {got_name}"
                );
            } else {
                eprintln!(
                    "Failed comparison, re-run with WRITE_LARGE_FAILURE env var set, to get output."
                );
            }

            panic!("Test assertion failed!")
        }
    }
}

fn test_impl_custom(mut test_fn: impl FnMut(usize, fn(usize) -> Vec<i32>)) {
    let test_pattern_fns: Vec<fn(usize) -> Vec<i32>> = vec![
        patterns::random,
        |len| patterns::random_uniform(len, 0..=(((len as f64).log2().round()) as i32)),
        |len| patterns::random_uniform(len, 0..=1),
        |len| patterns::random_mask(len, 95.0),
        |len| patterns::alternating_runs(len, 3),
        patterns::ascending,
        patterns::descending,
        |len| patterns::saw_mixed(len, ((len as f64).log2().round()) as usize),
    ];

    for test_pattern_fn in test_pattern_fns {
        for test_len in &TEST_SIZES[..TEST_SIZES.len() - 2] {
            if *test_len < 2 {
                continue;
            }

            test_fn(*test_len, test_pattern_fn);
        }
    }
}

pub trait DynTrait: Debug {
    fn get_val(&self) -> i32;
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct DynValA {
    value: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct DynValB {
    value: i32,
}

impl DynTrait for DynValA {
    fn get_val(&self) -> i32 {
        self.value
    }
}
impl DynTrait for DynValB {
    fn get_val(&self) -> i32 {
        self.value
    }
}

impl PartialEq for dyn DynTrait {
    fn eq(&self, other: &Self) -> bool {
        self.get_val() == other.get_val()
    }
}

impl Eq for dyn DynTrait {}

fn dyn_vals(len: usize) -> Vec<std::rc::Rc<dyn DynTrait>> {
    // Dyn values are fat pointers, something the implementation might have overlooked.
    patterns::random(len)
        .into_iter()
        .map(|val| -> std::rc::Rc<dyn DynTrait> {
            if val < (i32::MAX / 2) {
                std::rc::Rc::new(DynValA { value: val })
            } else {
                std::rc::Rc::new(DynValB { value: val })
            }
        })
        .collect()
}

/// 1KiB value type, so that swaps are expensive and can't be done in registers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OneKiloByte {
    values: [i32; 256],
}

impl OneKiloByte {
    pub fn new(val: i32) -> Self {
        let mut values = [0; 256];
        values[0] = val;
        values[255] = val;

        Self { values }
    }

    pub fn key(&self) -> i32 {
        self.values[0]
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_test_impl_inner {
    ($test_impl:ty, $module:ident, miri_yes, $test_name:ident) => {
        #[test]
        fn $test_name() {
            partition_test_tools::tests::$module::$test_name::<$test_impl>();
        }
    };
    ($test_impl:ty, $module:ident, miri_no, $test_name:ident) => {
        #[test]
        #[cfg(not(miri))]
        fn $test_name() {
            partition_test_tools::tests::$module::$test_name::<$test_impl>();
        }

        #[test]
        #[cfg(miri)]
        #[ignore]
        fn $test_name() {}
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_test_impl {
    ($test_impl:ty, $module:ident, $([$miri_use:ident, $test_name:ident]),*) => {
        $(
            partition_test_tools::instantiate_test_impl_inner!(
                $test_impl,
                $module,
                $miri_use,
                $test_name
            );
        )*
    };
}

#[macro_export]
macro_rules! instantiate_rotate_tests {
    ($rotate_impl:ty) => {
        partition_test_tools::instantiate_test_impl!(
            $rotate_impl,
            rotate,
            [miri_yes, basic],
            [miri_yes, fixed_seed],
            [miri_yes, every_middle],
            [miri_yes, random],
            [miri_no, random_large_len],
            [miri_yes, round_trip],
            [miri_yes, no_move_at_edges],
            [miri_yes, random_str],
            [miri_yes, random_large_val],
            [miri_yes, dyn_val]
        );
    };
}

#[macro_export]
macro_rules! instantiate_stable_partition_tests {
    ($partition_impl:ty) => {
        partition_test_tools::instantiate_test_impl!(
            $partition_impl,
            stable_partition,
            [miri_yes, basic],
            [miri_yes, fixed_seed],
            [miri_yes, random],
            [miri_no, random_binary],
            [miri_yes, random_mask_5p],
            [miri_yes, random_mask_95p],
            [miri_yes, random_z1],
            [miri_yes, alternating_runs],
            [miri_yes, all_equal],
            [miri_yes, ascending],
            [miri_yes, descending],
            [miri_no, saw_mixed],
            [miri_yes, pipe_organ],
            [miri_yes, int_edge],
            [miri_yes, already_partitioned],
            [miri_yes, stability],
            [miri_no, stability_with_patterns],
            [miri_yes, by_index],
            [miri_yes, by_index_matches_by_value],
            [miri_yes, pred_called_once],
            [miri_yes, pred_panic],
            [miri_yes, panic_retain_original_set],
            [miri_yes, random_str],
            [miri_yes, random_large_val],
            [miri_yes, dyn_val]
        );
    };
}

#[macro_export]
macro_rules! instantiate_partition_point_tests {
    ($partition_point_impl:ty) => {
        partition_test_tools::instantiate_test_impl!(
            $partition_point_impl,
            partition_point,
            [miri_yes, basic],
            [miri_yes, fixed_seed],
            [miri_yes, random],
            [miri_yes, random_mask],
            [miri_yes, ascending_threshold],
            [miri_yes, all_equal],
            [miri_yes, not_partitioned],
            [miri_yes, random_str]
        );
    };
}
