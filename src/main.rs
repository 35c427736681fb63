use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, MatchedPath};
use dotenvy::dotenv;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use playbook::application::ports::account_repository::AccountRepository;
use playbook::application::ports::sign_off_log::SignOffLog;
use playbook::application::ports::sign_off_repository::SignOffRepository;
use playbook::bootstrap::app_context::{AppContext, AppServices};
use playbook::bootstrap::config::Config;
use playbook::infrastructure::db::repositories::account_repository_sqlx::SqlxAccountRepository;
use playbook::infrastructure::db::repositories::sign_off_repository_sqlx::SqlxSignOffRepository;
use playbook::infrastructure::storage::FileSignOffLog;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            playbook::presentation::http::score::calculate,
            playbook::presentation::http::auth::me,
            playbook::presentation::http::health::health,
        ),
        components(schemas(
            playbook::presentation::http::score::ScoreResponse,
            playbook::presentation::http::score::ScoreErrorResponse,
            playbook::presentation::http::auth::AccountResponse,
            playbook::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Scoring", description = "Compliance score calculator"),
            (name = "Accounts", description = "Session account"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

// Form posts only; nothing here uploads files.
const BODY_LIMIT_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "playbook=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting playbook server");

    // Database: required and migrated in account mode, lazy in file mode
    let pool =
        playbook::infrastructure::db::open_pool(&cfg.database_url, cfg.sign_off_mode).await?;

    let account_repo: Arc<dyn AccountRepository> =
        Arc::new(SqlxAccountRepository::new(pool.clone()));
    let sign_off_repo: Arc<dyn SignOffRepository> =
        Arc::new(SqlxSignOffRepository::new(pool.clone()));
    let sign_off_log: Arc<dyn SignOffLog> =
        Arc::new(FileSignOffLog::new(&cfg.sign_off_log_file));
    info!(mode = ?cfg.sign_off_mode, log = %cfg.sign_off_log_file, "sign_off_configured");

    let services = AppServices::new(account_repo, sign_off_repo, sign_off_log);
    let ctx = AppContext::new(cfg.clone(), services);

    if !std::path::Path::new(&cfg.supporting_files_dir).is_dir() {
        tracing::warn!(dir = %cfg.supporting_files_dir, "Supporting files directory not found");
    }

    let app = playbook::presentation::http::app_router(ctx)
        .nest(
            "/api",
            playbook::presentation::http::health::routes(pool.clone(), cfg.sign_off_mode),
        )
        .nest_service("/files", ServeDir::new(&cfg.supporting_files_dir))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%addr, "HTTP listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(?e, "HTTP server failed");
        return Err(e.into());
    }
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(?e, "Failed to listen for shutdown signal");
    }
}
