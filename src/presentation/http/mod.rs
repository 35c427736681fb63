pub mod audit;
pub mod auth;
pub mod flash;
pub mod health;
pub mod pages;
pub mod score;
pub mod sign_off;

#[cfg(test)]
pub(crate) mod testing;

use axum::Router;

use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::SignOffMode;

/// HTML pages, forms and the score endpoint. Infrastructure routes (health,
/// OpenAPI, static files) and middleware are layered on in `main`.
pub fn app_router(ctx: AppContext) -> Router {
    let sign_off = match ctx.cfg.sign_off_mode {
        SignOffMode::File => sign_off::file_routes(ctx.clone()),
        SignOffMode::Account => sign_off::account_routes(ctx.clone()),
    };
    Router::new()
        .merge(pages::routes(ctx.clone()))
        .merge(audit::routes(ctx.clone()))
        .merge(score::routes())
        .merge(auth::routes(ctx.clone()))
        .merge(sign_off)
        .nest("/api", auth::api_routes(ctx))
}
