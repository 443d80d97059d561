//! Reminder API service
//!
//! HTTP gateway exposing CRUD operations on reminders. Callers authenticate
//! with an RS256 bearer token, each route is checked against a role policy,
//! and the work itself is delegated to a [`service::ReminderService`].

pub mod config;
pub mod error;
pub mod identity;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod policy;
pub mod repositories;
pub mod routes;
pub mod service;
pub mod state;
