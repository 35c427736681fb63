use uuid::Uuid;

use crate::application::ports::account_repository::AccountRepository;
use crate::application::ports::sign_off_repository::SignOffRepository;
use crate::application::use_cases::sign_off::SignOffError;
use crate::domain::accounts::account::{AnalystSignOff, Role};

/// Sign-off tracking for leads: every analyst with their sign-off time.
pub struct ListSignOffs<'a, A, S>
where
    A: AccountRepository + ?Sized,
    S: SignOffRepository + ?Sized,
{
    pub accounts: &'a A,
    pub sign_offs: &'a S,
}

impl<'a, A, S> ListSignOffs<'a, A, S>
where
    A: AccountRepository + ?Sized,
    S: SignOffRepository + ?Sized,
{
    pub async fn execute(&self, viewer_id: Uuid) -> Result<Vec<AnalystSignOff>, SignOffError> {
        let viewer = self
            .accounts
            .find_by_id(viewer_id)
            .await
            .map_err(SignOffError::Storage)?
            .ok_or(SignOffError::UnknownAccount(viewer_id))?;
        if viewer.role != Role::Lead {
            return Err(SignOffError::LeadOnly);
        }
        self.sign_offs
            .list_analysts()
            .await
            .map_err(SignOffError::Storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{InMemoryAccounts, InMemorySignOffs};
    use crate::application::use_cases::sign_off::record_sign_off::RecordSignOff;

    #[tokio::test]
    async fn lead_sees_every_analyst() {
        let accounts = InMemoryAccounts::default();
        let lead = accounts.seed("ross", Role::Lead);
        let akira = accounts.seed("akira", Role::Analyst);
        accounts.seed("cherelle", Role::Analyst);
        let sign_offs = InMemorySignOffs::new(&accounts);
        RecordSignOff {
            accounts: &accounts,
            sign_offs: &sign_offs,
        }
        .execute(akira)
        .await
        .unwrap();

        let rows = ListSignOffs {
            accounts: &accounts,
            sign_offs: &sign_offs,
        }
        .execute(lead)
        .await
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "akira");
        assert!(rows[0].signed_at.is_some());
        assert_eq!(rows[1].name, "cherelle");
        assert!(rows[1].signed_at.is_none());
    }

    #[tokio::test]
    async fn analysts_are_refused() {
        let accounts = InMemoryAccounts::default();
        let akira = accounts.seed("akira", Role::Analyst);
        let sign_offs = InMemorySignOffs::new(&accounts);
        let err = ListSignOffs {
            accounts: &accounts,
            sign_offs: &sign_offs,
        }
        .execute(akira)
        .await
        .unwrap_err();
        assert!(matches!(err, SignOffError::LeadOnly));
    }
}
