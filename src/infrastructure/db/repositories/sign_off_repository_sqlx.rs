use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::sign_off_repository::{InsertSignOffError, SignOffRepository};
use crate::domain::accounts::account::{AnalystSignOff, SignOffRecord};
use crate::infrastructure::db::{PgPool, is_unique_violation};

pub struct SqlxSignOffRepository {
    pub pool: PgPool,
}

impl SqlxSignOffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SignOffRepository for SqlxSignOffRepository {
    async fn find_for_account(&self, account_id: Uuid) -> anyhow::Result<Option<SignOffRecord>> {
        let row = sqlx::query(
            r#"SELECT id, account_id, created_at FROM sign_offs WHERE account_id = $1"#,
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| SignOffRecord {
            id: r.get("id"),
            account_id: r.get("account_id"),
            created_at: r.get("created_at"),
        }))
    }

    async fn insert(&self, account_id: Uuid) -> Result<SignOffRecord, InsertSignOffError> {
        let row = sqlx::query(
            r#"INSERT INTO sign_offs (account_id) VALUES ($1)
               RETURNING id, account_id, created_at"#,
        )
        .bind(account_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                InsertSignOffError::AlreadyExists
            } else {
                InsertSignOffError::Storage(e.into())
            }
        })?;
        Ok(SignOffRecord {
            id: row.get("id"),
            account_id: row.get("account_id"),
            created_at: row.get("created_at"),
        })
    }

    async fn list_analysts(&self) -> anyhow::Result<Vec<AnalystSignOff>> {
        let rows = sqlx::query(
            r#"SELECT a.id, a.name, s.created_at AS signed_at
               FROM accounts a
               LEFT JOIN sign_offs s ON s.account_id = a.id
               WHERE a.role = 'analyst'
               ORDER BY a.name ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| AnalystSignOff {
                account_id: r.get("id"),
                name: r.get("name"),
                signed_at: r.get::<Option<chrono::DateTime<chrono::Utc>>, _>("signed_at"),
            })
            .collect())
    }
}
