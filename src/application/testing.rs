//! In-memory port implementations for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::account_repository::{
    AccountRepository, AccountRow, CreateAccountError,
};
use crate::application::ports::sign_off_log::SignOffLog;
use crate::application::ports::sign_off_repository::{InsertSignOffError, SignOffRepository};
use crate::domain::accounts::account::{AnalystSignOff, Role, SignOffRecord};

#[derive(Default, Clone)]
pub struct InMemoryAccounts {
    rows: Arc<Mutex<Vec<AccountRow>>>,
}

impl InMemoryAccounts {
    /// Inserts an account without a password and returns its id.
    pub fn seed(&self, name: &str, role: Role) -> Uuid {
        let id = Uuid::new_v4();
        self.rows.lock().unwrap().push(AccountRow {
            id,
            name: name.to_string(),
            role,
            password_hash: None,
            created_at: chrono::Utc::now(),
        });
        id
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
    async fn create_account(
        &self,
        name: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<AccountRow, CreateAccountError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.name == name) {
            return Err(CreateAccountError::NameTaken);
        }
        let row = AccountRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            role,
            password_hash: Some(password_hash.to_string()),
            created_at: chrono::Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<AccountRow>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.name == name)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<AccountRow>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }
}

#[derive(Clone)]
pub struct InMemorySignOffs {
    accounts: Arc<Mutex<Vec<AccountRow>>>,
    records: Arc<Mutex<Vec<SignOffRecord>>>,
}

impl InMemorySignOffs {
    pub fn new(accounts: &InMemoryAccounts) -> Self {
        Self {
            accounts: accounts.rows.clone(),
            records: Arc::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl SignOffRepository for InMemorySignOffs {
    async fn find_for_account(&self, account_id: Uuid) -> anyhow::Result<Option<SignOffRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.account_id == account_id)
            .cloned())
    }

    async fn insert(&self, account_id: Uuid) -> Result<SignOffRecord, InsertSignOffError> {
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.account_id == account_id) {
            return Err(InsertSignOffError::AlreadyExists);
        }
        let record = SignOffRecord {
            id: Uuid::new_v4(),
            account_id,
            created_at: chrono::Utc::now(),
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn list_analysts(&self) -> anyhow::Result<Vec<AnalystSignOff>> {
        let records = self.records.lock().unwrap();
        let mut out: Vec<AnalystSignOff> = self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.role == Role::Analyst)
            .map(|a| AnalystSignOff {
                account_id: a.id,
                name: a.name.clone(),
                signed_at: records
                    .iter()
                    .find(|r| r.account_id == a.id)
                    .map(|r| r.created_at),
            })
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }
}

#[derive(Default, Clone)]
pub struct MemoryLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[async_trait]
impl SignOffLog for MemoryLog {
    async fn append(&self, line: &str) -> anyhow::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

pub struct FailingLog;

#[async_trait]
impl SignOffLog for FailingLog {
    async fn append(&self, _line: &str) -> anyhow::Result<()> {
        anyhow::bail!("disk full")
    }
}
