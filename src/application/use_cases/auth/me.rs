use uuid::Uuid;

use crate::application::ports::account_repository::AccountRepository;
use crate::domain::accounts::account::Account;

pub struct GetMe<'a, R: AccountRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AccountRepository + ?Sized> GetMe<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<Account>> {
        Ok(self.repo.find_by_id(id).await?.map(Into::into))
    }
}
