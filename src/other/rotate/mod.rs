pub mod reversal;
pub mod std;
