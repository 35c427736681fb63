use std::collections::HashMap;

use axum::{
    Form, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tracing::error;

use crate::application::use_cases::sign_off::SignOffError;
use crate::application::use_cases::sign_off::append_log_entry::{
    AppendLogEntry, AppendLogEntryError,
};
use crate::application::use_cases::sign_off::get_status::GetSignOffStatus;
use crate::application::use_cases::sign_off::list_sign_offs::ListSignOffs;
use crate::application::use_cases::sign_off::record_sign_off::RecordSignOff;
use crate::bootstrap::app_context::AppContext;
use crate::domain::accounts::account::Role;
use crate::presentation::http::auth::{Bearer, CurrentAccount, current_account};
use crate::presentation::http::flash::{self, Flash};
use crate::presentation::views;
use crate::presentation::views::sign_off::AccountSignOffState;

const THANKS: &str = "Thank you for signing off! Your entry has been recorded.";
const NAME_REQUIRED: &str = "Please enter your name to sign off.";
const WRITE_FAILED: &str =
    "Error: Could not write to the sign-off log file. Please try again later.";

/// Anonymous sign-off appended to the log file.
pub fn file_routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/sign_off", get(file_sign_off_page).post(file_sign_off))
        .with_state(ctx)
}

/// Sign-off tied to the logged-in account, plus lead tracking.
pub fn account_routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/sign_off", get(account_sign_off_page).post(account_sign_off))
        .route("/sign_off/status", get(sign_off_status))
        .with_state(ctx)
}

pub async fn file_sign_off_page(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    flash: Flash,
) -> Response {
    let session = current_account(&ctx.cfg, bearer);
    flash::page(
        views::sign_off::file_sign_off(session.as_ref(), flash.message(), None, true),
        &flash,
    )
}

pub async fn file_sign_off(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let session = current_account(&ctx.cfg, bearer);
    let log = ctx.sign_off_log();
    let uc = AppendLogEntry { log: log.as_ref() };
    let now = chrono::Local::now().naive_local();
    let (status, message, show_form) = match uc
        .execute(form.get("user_name").map(String::as_str), now)
        .await
    {
        Ok(_) => {
            tracing::info!("sign_off_logged");
            (StatusCode::OK, THANKS, false)
        }
        Err(AppendLogEntryError::MissingName) => {
            (StatusCode::UNPROCESSABLE_ENTITY, NAME_REQUIRED, true)
        }
        Err(AppendLogEntryError::Write(e)) => {
            error!(error = ?e, path = %ctx.cfg.sign_off_log_file, "sign_off_log_write_failed");
            (StatusCode::INTERNAL_SERVER_ERROR, WRITE_FAILED, true)
        }
    };
    (
        status,
        Html(views::sign_off::file_sign_off(
            session.as_ref(),
            None,
            Some(message),
            show_form,
        )),
    )
        .into_response()
}

fn require_login(message: &str) -> Response {
    let mut headers = HeaderMap::new();
    flash::set_flash(&mut headers, message);
    (headers, Redirect::to("/login")).into_response()
}

async fn render_account_page(
    ctx: &AppContext,
    session: &CurrentAccount,
    flash: Option<&str>,
    message: Option<&str>,
) -> Result<String, StatusCode> {
    let state = if session.role == Role::Lead {
        AccountSignOffState::Lead
    } else {
        let repo = ctx.sign_off_repo();
        let uc = GetSignOffStatus {
            sign_offs: repo.as_ref(),
        };
        match uc.execute(session.id).await.map_err(|e| {
            error!(account_id = %session.id, error = ?e, "sign_off_status_failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })? {
            Some(record) => AccountSignOffState::Signed(record.created_at),
            None => AccountSignOffState::NotSigned,
        }
    };
    Ok(views::sign_off::account_sign_off(
        session, flash, message, &state,
    ))
}

pub async fn account_sign_off_page(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    flash: Flash,
) -> Result<Response, StatusCode> {
    let Some(session) = current_account(&ctx.cfg, bearer) else {
        return Ok(require_login("Please log in to sign off."));
    };
    let html = render_account_page(&ctx, &session, flash.message(), None).await?;
    Ok(flash::page(html, &flash))
}

pub async fn account_sign_off(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
) -> Result<Response, StatusCode> {
    let Some(session) = current_account(&ctx.cfg, bearer) else {
        return Ok(require_login("Please log in to sign off."));
    };
    let accounts = ctx.account_repo();
    let sign_offs = ctx.sign_off_repo();
    let uc = RecordSignOff {
        accounts: accounts.as_ref(),
        sign_offs: sign_offs.as_ref(),
    };
    let (status, message) = match uc.execute(session.id).await {
        Ok(_) => (StatusCode::OK, THANKS),
        Err(SignOffError::AlreadySignedOff) => {
            (StatusCode::CONFLICT, "You have already signed off.")
        }
        Err(SignOffError::LeadCannotSignOff) => {
            (StatusCode::FORBIDDEN, "Leads do not sign off.")
        }
        Err(SignOffError::UnknownAccount(_)) => {
            return Ok(require_login("Your account could not be found. Please log in again."));
        }
        Err(e) => {
            error!(account_id = %session.id, error = ?e, "sign_off_record_failed");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };
    let html = render_account_page(&ctx, &session, None, Some(message)).await?;
    Ok((status, Html(html)).into_response())
}

pub async fn sign_off_status(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
) -> Result<Response, StatusCode> {
    let Some(session) = current_account(&ctx.cfg, bearer) else {
        return Ok(require_login("Please log in to view sign-off tracking."));
    };
    let accounts = ctx.account_repo();
    let sign_offs = ctx.sign_off_repo();
    let uc = ListSignOffs {
        accounts: accounts.as_ref(),
        sign_offs: sign_offs.as_ref(),
    };
    match uc.execute(session.id).await {
        Ok(rows) => Ok(Html(views::sign_off::tracking(&session, &rows)).into_response()),
        Err(SignOffError::LeadOnly) => Ok((
            StatusCode::FORBIDDEN,
            Html(views::sign_off::forbidden(
                Some(&session),
                "Only leads can view sign-off tracking.",
            )),
        )
            .into_response()),
        Err(SignOffError::UnknownAccount(_)) => Ok(require_login(
            "Your account could not be found. Please log in again.",
        )),
        Err(e) => {
            error!(account_id = %session.id, error = ?e, "sign_off_list_failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
