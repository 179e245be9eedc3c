pub mod partition_proptest;
