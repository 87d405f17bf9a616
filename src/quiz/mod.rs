pub mod context;
pub mod keyboard;
pub mod submission;
pub mod token;
