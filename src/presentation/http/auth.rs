use crate::application::use_cases::auth::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::application::use_cases::auth::me::GetMe;
use crate::application::use_cases::auth::register::{
    Register as RegisterUc, RegisterError, RegisterRequest as RegisterDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::domain::accounts::account::{Account, Role};
use crate::presentation::http::flash::{self, Flash};
use crate::presentation::views;
use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub lead_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Account> for AccountResponse {
    fn from(a: Account) -> Self {
        AccountResponse {
            id: a.id,
            name: a.name,
            role: a.role.as_str().to_string(),
            created_at: a.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub role: String,
    pub exp: usize,
}

/// Account identity carried by a valid session token.
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/register", get(register_page).post(register))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout).post(logout))
        .with_state(ctx)
}

pub fn api_routes(ctx: AppContext) -> Router {
    Router::new().route("/me", get(me)).with_state(ctx)
}

pub async fn register_page(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    flash: Flash,
) -> Response {
    let session = current_account(&ctx.cfg, bearer);
    flash::page(
        views::accounts::register_page(session.as_ref(), flash.message(), None),
        &flash,
    )
}

pub async fn register(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, StatusCode> {
    let session = current_account(&ctx.cfg, bearer);
    let rerender = |status: StatusCode, message: &str| {
        rerender_register(status, session.as_ref(), message)
    };
    let role = match form.role.as_deref().unwrap_or("analyst").parse::<Role>() {
        Ok(r) => r,
        Err(_) => {
            return Ok(rerender(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Please choose a valid role.",
            ));
        }
    };
    let repo = ctx.account_repo();
    let uc = RegisterUc {
        repo: repo.as_ref(),
        lead_access_code: &ctx.cfg.lead_access_code,
    };
    let dto = RegisterDto {
        name: form.name.clone(),
        password: form.password.clone(),
        role,
        lead_code: form.lead_code.clone(),
    };
    match uc.execute(&dto).await {
        Ok(account) => {
            tracing::info!(account_id = %account.id, role = %account.role, "account_registered");
            let mut headers = HeaderMap::new();
            flash::set_flash(&mut headers, "Registration successful. Please log in.");
            Ok((headers, Redirect::to("/login")).into_response())
        }
        Err(RegisterError::MissingName) | Err(RegisterError::MissingPassword) => Ok(
            rerender(StatusCode::UNPROCESSABLE_ENTITY, "Username and password are required."),
        ),
        Err(RegisterError::InvalidLeadCode) => Ok(rerender(
            StatusCode::FORBIDDEN,
            "Invalid lead access code.",
        )),
        Err(RegisterError::NameTaken) => Ok(rerender(
            StatusCode::CONFLICT,
            "Username already exists. Please choose a different one.",
        )),
        Err(RegisterError::Internal(e)) => {
            error!(error = ?e, "register_failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn rerender_register(
    status: StatusCode,
    session: Option<&CurrentAccount>,
    message: &str,
) -> Response {
    (
        status,
        Html(views::accounts::register_page(session, None, Some(message))),
    )
        .into_response()
}

pub async fn login_page(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    flash: Flash,
) -> Response {
    let session = current_account(&ctx.cfg, bearer);
    flash::page(
        views::accounts::login_page(session.as_ref(), flash.message(), None),
        &flash,
    )
}

pub async fn login(
    State(ctx): State<AppContext>,
    Form(form): Form<LoginForm>,
) -> Result<Response, StatusCode> {
    let repo = ctx.account_repo();
    let uc = LoginUc {
        repo: repo.as_ref(),
    };
    let dto = LoginDto {
        name: form.name.clone(),
        password: form.password.clone(),
    };
    let account = uc.execute(&dto).await.map_err(|e| {
        error!(error = ?e, "login_failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let Some(account) = account else {
        return Ok((
            StatusCode::UNAUTHORIZED,
            Html(views::accounts::login_page(
                None,
                None,
                Some("Invalid username or password."),
            )),
        )
            .into_response());
    };

    let token = issue_token(&ctx.cfg, &account).map_err(|e| {
        error!(error = ?e, "token_issue_failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, session_cookie(&ctx.cfg, &token)?);
    flash::set_flash(&mut headers, &format!("Welcome back, {}!", account.name));
    tracing::info!(account_id = %account.id, "login_succeeded");
    Ok((headers, Redirect::to("/sign_off")).into_response())
}

pub async fn logout(State(ctx): State<AppContext>) -> Response {
    // Clear cookie by setting it expired
    let mut headers = HeaderMap::new();
    let cookie = if ctx.cfg.secure_cookies() {
        "access_token=; HttpOnly; Secure; Path=/; Max-Age=0; SameSite=Lax"
    } else {
        "access_token=; HttpOnly; Path=/; Max-Age=0; SameSite=Lax"
    };
    headers.append(header::SET_COOKIE, HeaderValue::from_static(cookie));
    flash::set_flash(&mut headers, "You have been logged out.");
    (headers, Redirect::to("/")).into_response()
}

#[utoipa::path(get, path = "/api/me", tag = "Accounts", responses(
    (status = 200, body = AccountResponse),
    (status = 401, description = "Missing or invalid session")
))]
pub async fn me(
    State(ctx): State<AppContext>,
    bearer: Result<Bearer, StatusCode>,
) -> Result<Json<AccountResponse>, StatusCode> {
    let claims = validate_bearer(&ctx.cfg, bearer?)?;
    let id = Uuid::parse_str(&claims.sub).map_err(|_| StatusCode::UNAUTHORIZED)?;
    let repo = ctx.account_repo();
    let uc = GetMe {
        repo: repo.as_ref(),
    };
    let account = uc
        .execute(id)
        .await
        .map_err(|e| {
            error!(error = ?e, "me_lookup_failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::UNAUTHORIZED)?;
    Ok(Json(account.into()))
}

// --- Bearer extractor & JWT utils ---
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

pub struct Bearer(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // 1) Prefer Authorization header if present
        if let Some(auth) = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
        {
            if let Some(t) = auth.strip_prefix("Bearer ") {
                return Ok(Bearer(t.to_string()));
            }
        }

        // 2) Fallback to HttpOnly cookie `access_token`
        if let Some(cookie_hdr) = parts
            .headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
        {
            if let Some(token) = get_cookie(cookie_hdr, "access_token") {
                if !token.is_empty() {
                    return Ok(Bearer(token));
                }
            }
        }

        Err(StatusCode::UNAUTHORIZED)
    }
}

pub fn issue_token(cfg: &Config, account: &Account) -> anyhow::Result<String> {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: account.id.to_string(),
        name: account.name.clone(),
        role: account.role.as_str().to_string(),
        exp: now + (cfg.jwt_expires_secs.max(0) as usize),
    };
    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
    )?;
    Ok(token)
}

pub(crate) fn validate_bearer(cfg: &Config, bearer: Bearer) -> Result<Claims, StatusCode> {
    let data = jsonwebtoken::decode::<Claims>(
        &bearer.0,
        &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| StatusCode::UNAUTHORIZED)?;
    Ok(data.claims)
}

/// Resolves the logged-in account from an optional token; invalid tokens read as anonymous.
pub fn current_account(cfg: &Config, bearer: Option<Bearer>) -> Option<CurrentAccount> {
    let claims = validate_bearer(cfg, bearer?).ok()?;
    Some(CurrentAccount {
        id: Uuid::parse_str(&claims.sub).ok()?,
        role: claims.role.parse().ok()?,
        name: claims.name,
    })
}

// --- Cookie helpers ---

fn session_cookie(cfg: &Config, token: &str) -> Result<HeaderValue, StatusCode> {
    let cookie = build_access_cookie(token, cfg.jwt_expires_secs, cfg.secure_cookies());
    HeaderValue::from_str(&cookie).map_err(|e| {
        error!(error = ?e, "session_cookie_invalid");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

pub(crate) fn get_cookie(cookie_header: &str, name: &str) -> Option<String> {
    for part in cookie_header.split(';') {
        let kv = part.trim();
        if let Some((k, v)) = kv.split_once('=') {
            if k.trim() == name {
                return Some(v.trim().to_string());
            }
        }
    }
    None
}

fn build_access_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let secure_attr = if secure { "; Secure" } else { "" };
    format!(
        "access_token={}; HttpOnly{}; Path=/; Max-Age={}; SameSite=Lax",
        token,
        secure_attr,
        max_age_secs.max(0)
    )
}
