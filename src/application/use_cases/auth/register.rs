use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use password_hash::rand_core::OsRng;

use crate::application::ports::account_repository::{AccountRepository, CreateAccountError};
use crate::domain::accounts::account::{Account, Role};

#[derive(thiserror::Error, Debug)]
pub enum RegisterError {
    #[error("name is required")]
    MissingName,
    #[error("password is required")]
    MissingPassword,
    #[error("invalid lead access code")]
    InvalidLeadCode,
    #[error("name already taken")]
    NameTaken,
    #[error("registration failed")]
    Internal(#[source] anyhow::Error),
}

pub struct Register<'a, R: AccountRepository + ?Sized> {
    pub repo: &'a R,
    pub lead_access_code: &'a str,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub password: String,
    pub role: Role,
    pub lead_code: Option<String>,
}

impl<'a, R: AccountRepository + ?Sized> Register<'a, R> {
    pub async fn execute(&self, req: &RegisterRequest) -> Result<Account, RegisterError> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(RegisterError::MissingName);
        }
        if req.password.is_empty() {
            return Err(RegisterError::MissingPassword);
        }
        if req.role == Role::Lead {
            let supplied = req.lead_code.as_deref().map(str::trim).unwrap_or("");
            if self.lead_access_code.is_empty() || supplied != self.lead_access_code {
                return Err(RegisterError::InvalidLeadCode);
            }
        }
        if self
            .repo
            .find_by_name(name)
            .await
            .map_err(RegisterError::Internal)?
            .is_some()
        {
            return Err(RegisterError::NameTaken);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(req.password.as_bytes(), &salt)
            .map_err(|e| RegisterError::Internal(anyhow::anyhow!(e.to_string())))?
            .to_string();
        let row = self
            .repo
            .create_account(name, &hash, req.role)
            .await
            .map_err(|e| match e {
                CreateAccountError::NameTaken => RegisterError::NameTaken,
                CreateAccountError::Storage(err) => RegisterError::Internal(err),
            })?;
        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryAccounts;

    fn request(name: &str, role: Role, lead_code: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            password: "hunter22".to_string(),
            role,
            lead_code: lead_code.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn stores_a_hashed_password() {
        let repo = InMemoryAccounts::default();
        let uc = Register {
            repo: &repo,
            lead_access_code: "secret",
        };
        let account = uc
            .execute(&request("akira", Role::Analyst, None))
            .await
            .unwrap();
        assert_eq!(account.name, "akira");
        assert_eq!(account.role, Role::Analyst);
        let row = repo.find_by_name("akira").await.unwrap().unwrap();
        let hash = row.password_hash.unwrap();
        assert!(hash.starts_with("$argon2"));
        assert_ne!(hash, "hunter22");
    }

    #[tokio::test]
    async fn rejects_duplicate_names() {
        let repo = InMemoryAccounts::default();
        let uc = Register {
            repo: &repo,
            lead_access_code: "secret",
        };
        uc.execute(&request("akira", Role::Analyst, None))
            .await
            .unwrap();
        let err = uc
            .execute(&request("  akira ", Role::Analyst, None))
            .await
            .unwrap_err();
        assert!(matches!(err, RegisterError::NameTaken));
    }

    #[tokio::test]
    async fn lead_role_requires_access_code() {
        let repo = InMemoryAccounts::default();
        let uc = Register {
            repo: &repo,
            lead_access_code: "secret",
        };
        let err = uc
            .execute(&request("ross", Role::Lead, None))
            .await
            .unwrap_err();
        assert!(matches!(err, RegisterError::InvalidLeadCode));
        let err = uc
            .execute(&request("ross", Role::Lead, Some("guess")))
            .await
            .unwrap_err();
        assert!(matches!(err, RegisterError::InvalidLeadCode));

        let lead = uc
            .execute(&request("ross", Role::Lead, Some("secret")))
            .await
            .unwrap();
        assert_eq!(lead.role, Role::Lead);
    }

    #[tokio::test]
    async fn requires_name_and_password() {
        let repo = InMemoryAccounts::default();
        let uc = Register {
            repo: &repo,
            lead_access_code: "secret",
        };
        let err = uc
            .execute(&request("   ", Role::Analyst, None))
            .await
            .unwrap_err();
        assert!(matches!(err, RegisterError::MissingName));

        let mut req = request("dale", Role::Analyst, None);
        req.password.clear();
        assert!(matches!(
            uc.execute(&req).await.unwrap_err(),
            RegisterError::MissingPassword
        ));
    }
}
