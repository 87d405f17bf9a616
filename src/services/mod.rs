pub mod health;
pub mod publisher;
pub mod scheduler;
