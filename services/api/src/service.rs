//! Reminder service contract consumed by the HTTP handlers

use async_trait::async_trait;
use common::error::DatabaseError;
use thiserror::Error;

use crate::{identity::Identity, models::Reminder};

/// Errors raised by a reminder service implementation
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Persistence and business rules for reminders
///
/// The handlers only interpret the shape of the result: `false` means the
/// service declined the change and `None` means there is nothing to return.
/// Everything else about scoping and matching belongs to the implementation.
#[async_trait]
pub trait ReminderService: Send + Sync {
    async fn create(&self, reminder: Reminder, identity: &Identity) -> Result<bool, ServiceError>;

    async fn read_all(&self) -> Result<Option<Vec<Reminder>>, ServiceError>;

    async fn read_all_user_locations(
        &self,
        identity: &Identity,
    ) -> Result<Option<Vec<Reminder>>, ServiceError>;

    async fn read(&self, id: i64, identity: &Identity) -> Result<Option<Reminder>, ServiceError>;

    async fn search(
        &self,
        title: Option<&str>,
        identity: &Identity,
    ) -> Result<Option<Reminder>, ServiceError>;

    async fn update(
        &self,
        reminder: Reminder,
        id: i64,
        identity: &Identity,
    ) -> Result<bool, ServiceError>;

    async fn delete(&self, id: i64, identity: &Identity) -> Result<bool, ServiceError>;
}
