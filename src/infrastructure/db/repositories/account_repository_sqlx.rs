use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::account_repository::{
    AccountRepository, AccountRow, CreateAccountError,
};
use crate::domain::accounts::account::Role;
use crate::infrastructure::db::{PgPool, is_unique_violation};

pub struct SqlxAccountRepository {
    pub pool: PgPool,
}

impl SqlxAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: &PgRow) -> anyhow::Result<AccountRow> {
    let role: String = r.get("role");
    Ok(AccountRow {
        id: r.get("id"),
        name: r.get("name"),
        role: role.parse::<Role>()?,
        password_hash: r.try_get("password_hash").ok(),
        created_at: r.get("created_at"),
    })
}

#[async_trait]
impl AccountRepository for SqlxAccountRepository {
    async fn create_account(
        &self,
        name: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<AccountRow, CreateAccountError> {
        let row = sqlx::query(
            r#"INSERT INTO accounts (name, password_hash, role) VALUES ($1, $2, $3)
               RETURNING id, name, password_hash, role, created_at"#,
        )
        .bind(name)
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                CreateAccountError::NameTaken
            } else {
                CreateAccountError::Storage(e.into())
            }
        })?;
        map_row(&row).map_err(CreateAccountError::Storage)
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<AccountRow>> {
        let row = sqlx::query(
            r#"SELECT id, name, password_hash, role, created_at FROM accounts WHERE name = $1"#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(map_row).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<AccountRow>> {
        let row = sqlx::query(r#"SELECT id, name, role, created_at FROM accounts WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(map_row).transpose()
    }
}
