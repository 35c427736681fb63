use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Role tag fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Analyst,
    Lead,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Analyst => "analyst",
            Role::Lead => "lead",
        }
    }

    pub fn can_sign_off(&self) -> bool {
        matches!(self, Role::Analyst)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "analyst" => Ok(Role::Analyst),
            "lead" => Ok(Role::Lead),
            other => anyhow::bail!("unknown role: {other}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone)]
pub struct SignOffRecord {
    pub id: Uuid,
    pub account_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// An analyst paired with their sign-off, if any.
#[derive(Debug, Clone)]
pub struct AnalystSignOff {
    pub account_id: Uuid,
    pub name: String,
    pub signed_at: Option<chrono::DateTime<chrono::Utc>>,
}
