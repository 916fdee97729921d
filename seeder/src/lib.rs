pub mod datasets;
pub mod driver;
