//! tally - Terminal-based bilingual expense and income tracker
//!
//! This library provides the core functionality for the tally application:
//! an in-memory session ledger of dated income/expense records, foreign
//! currency conversion at a user-adjustable rate, summary totals, monthly
//! statistics, and an interactive TUI with Chinese/English localization.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `i18n`: Static bilingual string tables
//! - `models`: Core data models (records, categories, amounts)
//! - `fx`: Currency conversion
//! - `ledger`: The session ledger and its reductions
//! - `session`: Action dispatch over the session state
//! - `sink`: Optional write-only external append sink
//! - `tui`: Interactive terminal interface

pub mod config;
pub mod error;
pub mod fx;
pub mod i18n;
pub mod ledger;
pub mod models;
pub mod session;
pub mod sink;
pub mod tui;

pub use error::TallyError;
