use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use social_api::application::ports::password_hasher::PasswordHasher;
use social_api::application::ports::token_service::TokenService;
use social_api::bootstrap::app_context::{AppContext, AppServices};
use social_api::bootstrap::config::Config;
use social_api::infrastructure::crypto::jwt::JwtTokenService;
use social_api::infrastructure::crypto::password::Argon2PasswordHasher;
use social_api::infrastructure::db::repositories::{
    follow_repository_sqlx::SqlxFollowRepository, post_repository_sqlx::SqlxPostRepository,
    user_repository_sqlx::SqlxUserRepository,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            social_api::presentation::http::auth::register,
            social_api::presentation::http::auth::login,
            social_api::presentation::http::users::get_own_profile,
            social_api::presentation::http::users::get_user_profile,
            social_api::presentation::http::users::follow_user,
            social_api::presentation::http::users::unfollow_user,
            social_api::presentation::http::posts::create_post,
            social_api::presentation::http::posts::list_user_posts,
            social_api::presentation::http::health::health,
        ),
        components(schemas(
            social_api::presentation::http::auth::RegisterRequest,
            social_api::presentation::http::auth::LoginRequest,
            social_api::presentation::http::auth::LoginResponse,
            social_api::presentation::http::auth::UserResponse,
            social_api::presentation::http::users::ProfileResponse,
            social_api::presentation::http::users::MessageResponse,
            social_api::presentation::http::posts::CreatePostRequest,
            social_api::presentation::http::posts::PostResponse,
            social_api::presentation::http::posts::PostItem,
            social_api::presentation::http::posts::PostListResponse,
            social_api::presentation::http::error::ErrorBody,
            social_api::presentation::http::error::FieldErrorBody,
            social_api::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Auth", description = "Registration and login"),
            (name = "Users", description = "Profiles and the follow graph"),
            (name = "Posts", description = "User posts"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

fn build_cors(cfg: &Config) -> CorsLayer {
    let methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::DELETE,
        http::Method::OPTIONS,
    ];
    let headers = [http::header::CONTENT_TYPE, http::header::AUTHORIZATION];
    match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers(headers),
        _ if cfg.is_production => {
            // FRONTEND_URL is enforced at config load; deny everything if it
            // still failed to parse as a header value.
            CorsLayer::new()
                .allow_origin(AllowOrigin::exact(HeaderValue::from_static(
                    "http://invalid",
                )))
                .allow_methods(methods)
                .allow_headers(headers)
        }
        // Development convenience
        _ => CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(methods)
            .allow_headers(headers),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "social_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting social backend");

    // Database
    let pool = social_api::infrastructure::db::connect_pool(
        &cfg.database_url,
        cfg.db_max_connections,
        cfg.db_timeout,
    )
    .await?;
    social_api::infrastructure::db::migrate(&pool).await?;

    let user_repo = Arc::new(SqlxUserRepository::new(pool.clone(), cfg.db_timeout));
    let follow_repo = Arc::new(SqlxFollowRepository::new(pool.clone(), cfg.db_timeout));
    let post_repo = Arc::new(SqlxPostRepository::new(pool.clone(), cfg.db_timeout));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new()?);
    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(
        &cfg.jwt_secret,
        cfg.jwt_expires_secs,
    ));

    let services = AppServices::new(
        user_repo,
        follow_repo,
        post_repo,
        password_hasher,
        token_service,
    );
    let ctx = AppContext::new(cfg.clone(), services);

    let app = social_api::presentation::http::routes(ctx)
        .merge(Router::new().nest(
            "/api",
            social_api::presentation::http::health::routes(pool.clone()),
        ))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(build_cors(&cfg))
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

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to listen for shutdown signal");
    }
}
