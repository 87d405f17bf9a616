//! # Daily Quiz Bot
//!
//! A Telegram bot that publishes one picture quiz per day and grades the
//! answers.
//!
//! ## Features
//! - Posts yesterday's answer and today's question once per day at a
//!   configured local time
//! - Inline-keyboard answer grid with per-button callback tokens
//! - Records at most one result per user per day, rejecting late and
//!   duplicate taps with localized feedback
//! - Forwards operational failures to an admin chat
//! - Persistent storage with SQLite

/// Callback handling and the outbound transport boundary
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// The quiz store: connection, models, and the store trait
pub mod database;
/// Core quiz logic: submission grading, tokens, and the answer keyboard
pub mod quiz;
/// Background services: daily publishing, scheduling, and health checks
pub mod services;
/// Utility functions for dates and error reports
pub mod utils;
