use uuid::Uuid;

use crate::application::ports::account_repository::AccountRepository;
use crate::application::ports::sign_off_repository::{InsertSignOffError, SignOffRepository};
use crate::application::use_cases::sign_off::SignOffError;
use crate::domain::accounts::account::SignOffRecord;

pub struct RecordSignOff<'a, A, S>
where
    A: AccountRepository + ?Sized,
    S: SignOffRepository + ?Sized,
{
    pub accounts: &'a A,
    pub sign_offs: &'a S,
}

impl<'a, A, S> RecordSignOff<'a, A, S>
where
    A: AccountRepository + ?Sized,
    S: SignOffRepository + ?Sized,
{
    pub async fn execute(&self, account_id: Uuid) -> Result<SignOffRecord, SignOffError> {
        let account = self
            .accounts
            .find_by_id(account_id)
            .await
            .map_err(SignOffError::Storage)?
            .ok_or(SignOffError::UnknownAccount(account_id))?;
        if !account.role.can_sign_off() {
            return Err(SignOffError::LeadCannotSignOff);
        }
        if self
            .sign_offs
            .find_for_account(account_id)
            .await
            .map_err(SignOffError::Storage)?
            .is_some()
        {
            return Err(SignOffError::AlreadySignedOff);
        }
        let record = self
            .sign_offs
            .insert(account_id)
            .await
            .map_err(|e| match e {
                InsertSignOffError::AlreadyExists => SignOffError::AlreadySignedOff,
                InsertSignOffError::Storage(err) => SignOffError::Storage(err),
            })?;
        tracing::info!(account_id = %account_id, "sign_off_recorded");
        Ok(record)
    }
}
