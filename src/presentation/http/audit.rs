use std::collections::HashMap;

use axum::{
    Form, Router,
    extract::State,
    response::{Html, Response},
    routing::{get, post},
};

use crate::application::use_cases::audit::select_domain::select_domain;
use crate::application::use_cases::audit::summarize_responses::summarize_responses;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::{Bearer, current_account};
use crate::presentation::http::flash::{self, Flash};
use crate::presentation::views;

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/audit_form", get(audit_form).post(choose_domain))
        .route("/submit_audit", post(submit_audit))
        .with_state(ctx)
}

pub async fn audit_form(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    flash: Flash,
) -> Response {
    let session = current_account(&ctx.cfg, bearer);
    let selection = select_domain(None);
    flash::page(
        views::audit::audit_form(session.as_ref(), flash.message(), &selection),
        &flash,
    )
}

pub async fn choose_domain(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    Form(form): Form<HashMap<String, String>>,
) -> Html<String> {
    let session = current_account(&ctx.cfg, bearer);
    let selection = select_domain(form.get("domain_select").map(String::as_str));
    Html(views::audit::audit_form(session.as_ref(), None, &selection))
}

pub async fn submit_audit(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    Form(form): Form<HashMap<String, String>>,
) -> Html<String> {
    let session = current_account(&ctx.cfg, bearer);
    let domain = form.get("domain").map(String::as_str);
    let responses = summarize_responses(domain, &form);
    tracing::debug!(domain = ?domain, answered = responses.len(), "audit_submitted");
    Html(views::audit::audit_summary(
        session.as_ref(),
        domain,
        &responses,
    ))
}
