//! Router fixtures backed by in-memory ports.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use tower::ServiceExt;

use crate::application::ports::sign_off_log::SignOffLog;
use crate::application::testing::{InMemoryAccounts, InMemorySignOffs, MemoryLog};
use crate::bootstrap::app_context::{AppContext, AppServices};
use crate::bootstrap::config::{Config, SignOffMode};
use crate::presentation::http::app_router;

pub fn test_config() -> Config {
    let mut cfg = Config::from_lookup(|_| None).expect("default config");
    cfg.jwt_secret = "test-signing-secret".into();
    cfg.lead_access_code = "lead-code".into();
    cfg
}

pub struct TestApp {
    pub router: Router,
    pub accounts: InMemoryAccounts,
    pub sign_offs: InMemorySignOffs,
    pub log: MemoryLog,
}

/// Router over the given ports with the test config.
pub fn router_for(mode: SignOffMode, services: AppServices) -> Router {
    let mut cfg = test_config();
    cfg.sign_off_mode = mode;
    app_router(AppContext::new(cfg, services))
}

pub async fn get(router: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut req = Request::builder().method("GET").uri(uri);
    if let Some(c) = cookie {
        req = req.header(header::COOKIE, c);
    }
    router
        .clone()
        .oneshot(req.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(
    router: &Router,
    uri: &str,
    body: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(c) = cookie {
        req = req.header(header::COOKIE, c);
    }
    router
        .clone()
        .oneshot(req.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

impl TestApp {
    pub fn new(mode: SignOffMode) -> Self {
        let log = MemoryLog::default();
        let mut app = Self::with_log(mode, Arc::new(log.clone()));
        app.log = log;
        app
    }

    /// In-memory accounts with the given sign-off log; `self.log` stays empty.
    pub fn with_log(mode: SignOffMode, log: Arc<dyn SignOffLog>) -> Self {
        let accounts = InMemoryAccounts::default();
        let sign_offs = InMemorySignOffs::new(&accounts);
        let services = AppServices::new(
            Arc::new(accounts.clone()),
            Arc::new(sign_offs.clone()),
            log,
        );
        Self {
            router: router_for(mode, services),
            accounts,
            sign_offs,
            log: MemoryLog::default(),
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        get(&self.router, uri, cookie).await
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        post_form(&self.router, uri, body, cookie).await
    }

    /// Registers and logs in, returning the `access_token` cookie pair.
    pub async fn login_as(&self, name: &str, role: &str) -> String {
        let body = format!("name={name}&password=pw-{name}&role={role}&lead_code=lead-code");
        let res = self.post_form("/register", &body, None).await;
        assert!(res.status().is_redirection(), "register {name}: {}", res.status());
        let res = self
            .post_form("/login", &format!("name={name}&password=pw-{name}"), None)
            .await;
        assert!(res.status().is_redirection(), "login {name}: {}", res.status());
        set_cookie(&res, "access_token").expect("session cookie")
    }
}

/// The `name=value` pair of a cookie set by the response.
pub fn set_cookie(res: &Response<Body>, name: &str) -> Option<String> {
    res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{name}=")))
        .map(str::to_string)
}

pub async fn body_text(res: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
