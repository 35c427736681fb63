use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::accounts::account::{Account, Role};

#[derive(Debug, Clone)]
pub struct AccountRow {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub password_hash: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            name: row.name,
            role: row.role,
            created_at: row.created_at,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CreateAccountError {
    #[error("account name already taken")]
    NameTaken,
    #[error("failed to store account")]
    Storage(#[source] anyhow::Error),
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create_account(
        &self,
        name: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<AccountRow, CreateAccountError>;
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<AccountRow>>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<AccountRow>>;
}
