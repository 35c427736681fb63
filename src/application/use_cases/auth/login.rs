use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};

use crate::application::ports::account_repository::AccountRepository;
use crate::domain::accounts::account::Account;

pub struct Login<'a, R: AccountRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

impl<'a, R: AccountRepository + ?Sized> Login<'a, R> {
    /// `Ok(None)` on unknown name or wrong password.
    pub async fn execute(&self, req: &LoginRequest) -> anyhow::Result<Option<Account>> {
        let row = match self.repo.find_by_name(req.name.trim()).await? {
            Some(r) => r,
            None => return Ok(None),
        };
        let Some(hash) = row.password_hash.clone() else {
            return Ok(None);
        };
        let parsed = PasswordHash::new(&hash).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed)
            .is_ok()
        {
            Ok(Some(row.into()))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryAccounts;
    use crate::application::use_cases::auth::register::{Register, RegisterRequest};
    use crate::domain::accounts::account::Role;

    async fn seeded() -> InMemoryAccounts {
        let repo = InMemoryAccounts::default();
        Register {
            repo: &repo,
            lead_access_code: "secret",
        }
        .execute(&RegisterRequest {
            name: "cherelle".into(),
            password: "correct horse".into(),
            role: Role::Analyst,
            lead_code: None,
        })
        .await
        .unwrap();
        repo
    }

    #[tokio::test]
    async fn accepts_correct_password() {
        let repo = seeded().await;
        let account = Login { repo: &repo }
            .execute(&LoginRequest {
                name: "cherelle".into(),
                password: "correct horse".into(),
            })
            .await
            .unwrap()
            .expect("login succeeds");
        assert_eq!(account.name, "cherelle");
    }

    #[tokio::test]
    async fn rejects_bad_credentials() {
        let repo = seeded().await;
        let uc = Login { repo: &repo };
        let wrong = uc
            .execute(&LoginRequest {
                name: "cherelle".into(),
                password: "battery staple".into(),
            })
            .await
            .unwrap();
        assert!(wrong.is_none());
        let unknown = uc
            .execute(&LoginRequest {
                name: "nobody".into(),
                password: "correct horse".into(),
            })
            .await
            .unwrap();
        assert!(unknown.is_none());
    }
}
