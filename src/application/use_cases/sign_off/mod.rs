pub mod append_log_entry;
pub mod get_status;
pub mod list_sign_offs;
pub mod record_sign_off;

use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum SignOffError {
    #[error("account {0} not found")]
    UnknownAccount(Uuid),
    #[error("leads do not sign off")]
    LeadCannotSignOff,
    #[error("account has already signed off")]
    AlreadySignedOff,
    #[error("only leads can view sign-off tracking")]
    LeadOnly,
    #[error("sign-off storage failed")]
    Storage(#[source] anyhow::Error),
}
