//! Application state shared across handlers

use std::sync::Arc;

use crate::{jwt::JwtVerifier, service::ReminderService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub reminder_service: Arc<dyn ReminderService>,
    pub jwt_verifier: JwtVerifier,
}
