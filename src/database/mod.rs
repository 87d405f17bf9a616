pub mod connection;
pub mod memory;
pub mod models;
pub mod store;
