pub mod partition_point;
pub mod rotate;
pub mod stable_partition;
