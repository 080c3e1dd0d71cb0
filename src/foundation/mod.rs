pub mod clock;
pub mod core;
pub mod error;
pub mod math;
