pub mod estimator;
pub mod latch;
