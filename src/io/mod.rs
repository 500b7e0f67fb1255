pub mod demand;
pub mod reporting;
pub mod sales;
