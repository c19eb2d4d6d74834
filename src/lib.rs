//! Bulletin - a minimal blog backend
//!
//! Articles with nested comments, stored in SQLite or MySQL. The crate is
//! the data-access layer behind an HTTP controller layer that lives
//! elsewhere.

pub mod config;
pub mod db;
pub mod models;
pub mod services;
