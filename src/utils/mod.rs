pub mod datetime;
pub mod report;
