use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::bootstrap::config::SignOffMode;
use crate::infrastructure::db::PgPool;

#[derive(Clone)]
pub struct HealthState {
    pub pool: PgPool,
    pub sign_off_mode: SignOffMode,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResp {
    /// `ok` or `degraded`
    pub status: &'static str,
    pub database: &'static str,
    pub sign_off_mode: &'static str,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, body = HealthResp))
)]
pub async fn health(State(state): State<HealthState>) -> Json<HealthResp> {
    let db_ok = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.pool)
        .await
        .is_ok();
    Json(HealthResp {
        status: if db_ok { "ok" } else { "degraded" },
        database: if db_ok { "reachable" } else { "unreachable" },
        sign_off_mode: match state.sign_off_mode {
            SignOffMode::File => "file",
            SignOffMode::Account => "account",
        },
    })
}

pub fn routes(pool: PgPool, sign_off_mode: SignOffMode) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(HealthState {
            pool,
            sign_off_mode,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::infrastructure::db::lazy_pool;
    use crate::infrastructure::db::tests::UNREACHABLE_DB;
    use crate::presentation::http::testing::body_text;

    #[tokio::test]
    async fn reports_degraded_without_database() {
        let app = routes(lazy_pool(UNREACHABLE_DB).unwrap(), SignOffMode::File);
        let res = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(res).await).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["database"], "unreachable");
        assert_eq!(json["sign_off_mode"], "file");
    }
}
