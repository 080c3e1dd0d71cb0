pub mod label;
pub mod overlay;
