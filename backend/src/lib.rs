//! # Player Summary Backend
//!
//! Per-player basketball game summaries and shot charts.
//!
//! A summary is a player's name plus one record per game played: box-score
//! counters, shooting splits and the location of every shot attempted, in feet
//! relative to the basket. Shot charts convert those locations to diagram
//! pixels with [`to_pixels`](models::to_pixels).
//!
//! ## Features
//!
//! - **Data Model**: `Shot`, `Game` and `PlayerSummary`, with a camelCase JSON wire format
//! - **Court Transform**: feet to pixels at a configurable pixels-per-foot scale
//! - **Data Loading**: Import teams, players and box scores from JSON files
//! - **Validation**: Flag malformed summaries (made > attempted, bad dates, …)
//! - **Change Feed**: Subscribe to summary refreshes
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! - [`api`]: Public types re-exported in one place
//! - [`models`]: Domain model and the court transform
//! - [`db`]: Repository traits, in-memory repository and dataset loader
//! - [`services`]: Retrieval, validation, shot charts and the summary feed
//! - [`routes`]: Response types for each endpoint
//! - [`config`]: TOML and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
