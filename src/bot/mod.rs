pub mod handlers;
pub mod transport;

/// Error type shared by dispatcher endpoints.
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
