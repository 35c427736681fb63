use uuid::Uuid;

use crate::application::ports::sign_off_repository::SignOffRepository;
use crate::domain::accounts::account::SignOffRecord;

pub struct GetSignOffStatus<'a, S: SignOffRepository + ?Sized> {
    pub sign_offs: &'a S,
}

impl<'a, S: SignOffRepository + ?Sized> GetSignOffStatus<'a, S> {
    pub async fn execute(&self, account_id: Uuid) -> anyhow::Result<Option<SignOffRecord>> {
        self.sign_offs.find_for_account(account_id).await
    }
}
