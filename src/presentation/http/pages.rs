use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::{Bearer, current_account};
use crate::presentation::http::flash::{self, Flash};
use crate::presentation::views;

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/roles", get(roles))
        .route("/lifecycle", get(lifecycle))
        .route("/interactive_workflow", get(interactive_workflow))
        .route("/supporting_files", get(supporting_files))
        .route("/self_assessment_form_page", get(self_assessment_form_page))
        .route("/score_calculator", get(score_calculator))
        .fallback(not_found)
        .with_state(ctx)
}

pub async fn index(State(ctx): State<AppContext>, bearer: Option<Bearer>, flash: Flash) -> Response {
    let session = current_account(&ctx.cfg, bearer);
    flash::page(views::pages::index(session.as_ref(), flash.message()), &flash)
}

pub async fn roles(State(ctx): State<AppContext>, bearer: Option<Bearer>, flash: Flash) -> Response {
    let session = current_account(&ctx.cfg, bearer);
    flash::page(views::pages::roles(session.as_ref(), flash.message()), &flash)
}

pub async fn lifecycle(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    flash: Flash,
) -> Response {
    let session = current_account(&ctx.cfg, bearer);
    flash::page(
        views::pages::lifecycle(session.as_ref(), flash.message()),
        &flash,
    )
}

pub async fn interactive_workflow(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    flash: Flash,
) -> Response {
    let session = current_account(&ctx.cfg, bearer);
    flash::page(
        views::pages::interactive_workflow(session.as_ref(), flash.message()),
        &flash,
    )
}

pub async fn supporting_files(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    flash: Flash,
) -> Response {
    let session = current_account(&ctx.cfg, bearer);
    flash::page(
        views::pages::supporting_files(session.as_ref(), flash.message()),
        &flash,
    )
}

pub async fn self_assessment_form_page(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    flash: Flash,
) -> Response {
    let session = current_account(&ctx.cfg, bearer);
    flash::page(
        views::pages::self_assessment_form(session.as_ref(), flash.message()),
        &flash,
    )
}

pub async fn score_calculator(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    flash: Flash,
) -> Response {
    let session = current_account(&ctx.cfg, bearer);
    flash::page(
        views::score::score_calculator(session.as_ref(), flash.message()),
        &flash,
    )
}

pub async fn not_found(State(ctx): State<AppContext>, bearer: Option<Bearer>) -> Response {
    let session = current_account(&ctx.cfg, bearer);
    (
        StatusCode::NOT_FOUND,
        Html(views::pages::not_found(session.as_ref())),
    )
        .into_response()
}
