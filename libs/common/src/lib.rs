//! Shared building blocks for the reminder services
//!
//! This crate provides the PostgreSQL connection pool, its configuration and
//! the database error type used by the service crates.

pub mod database;
pub mod error;
