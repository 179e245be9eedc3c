pub mod feed_test;
pub mod gateway_test;
