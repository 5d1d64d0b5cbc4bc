//! # Pool Usage
//!
//! Scrapes the current occupancy percentage of the Lazdynai swimming pool and
//! sports club, stores each reading in SQLite or PostgreSQL and optionally forwards it to a
//! Telegram chat.
//!
//! ## Overview
//!
//! A run is a single pass through four stages:
//! - Storage initialization (create the `pool_usage` table if absent)
//! - Fetching the public page and extracting the percentage
//! - Recording a timestamped reading
//! - Posting a message through the Telegram Bot API
//!
//! ## Features
//!
//! - `colors` (default): Enables terminal color output via owo-colors
//! - `postgres` (default): Enables `postgres://` storage via sqlx

/// Command-line argument parsing
pub mod cli;

/// Validated runtime configuration
pub mod config;

/// Display formatting for text and JSON run summaries
pub mod display;

/// SQLite and PostgreSQL storage for usage readings
pub mod db;

/// Error taxonomy shared by every stage
pub mod error;

/// Shared blocking HTTP agent
pub mod http;

/// Log filter setup for the binary
pub mod logging;

/// Data models for readings and percentages
pub mod models;

/// Telegram notifications
pub mod notify;

/// Stage sequencing for a single run
pub mod pipeline;

/// Page fetching and percentage extraction
pub mod scrape;

pub use error::{Error, Result};
