use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::accounts::account::{AnalystSignOff, SignOffRecord};

#[derive(thiserror::Error, Debug)]
pub enum InsertSignOffError {
    #[error("sign-off already recorded for account")]
    AlreadyExists,
    #[error("failed to store sign-off")]
    Storage(#[source] anyhow::Error),
}

#[async_trait]
pub trait SignOffRepository: Send + Sync {
    async fn find_for_account(&self, account_id: Uuid) -> anyhow::Result<Option<SignOffRecord>>;
    async fn insert(&self, account_id: Uuid) -> Result<SignOffRecord, InsertSignOffError>;
    /// Every analyst account, ordered by name, with its sign-off time if any.
    async fn list_analysts(&self) -> anyhow::Result<Vec<AnalystSignOff>>;
}
