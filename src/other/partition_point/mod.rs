pub mod branchless_clean;
pub mod std;
