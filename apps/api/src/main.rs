use forum_api::{
    config::Config,
    infrastructure::{
        database::pool::create_pool,
        repositories::{
            sqlx_authentication_repository::SqlxAuthenticationRepository,
            sqlx_comment_likes_repository::SqlxCommentLikesRepository,
            sqlx_comment_repository::SqlxCommentRepository,
            sqlx_reply_repository::SqlxReplyRepository,
            sqlx_thread_repository::SqlxThreadRepository,
            sqlx_user_repository::SqlxUserRepository,
        },
        security::{
            bcrypt_password_hash::BcryptPasswordHash,
            jwt_token_manager::JwtTokenManager,
            rate_limiter::{FixedWindowStore, RateLimiter, RedisWindowCounter},
        },
    },
    presentation::http::{routes::create_router, state::AppState},
};
use axum::extract::DefaultBodyLimit;
use http::{HeaderValue, Method, header};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // RUST_LOG wins when set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new("info,forum_api=debug,tower_http=debug")
        })
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let db = create_pool(&config.database_url, config.database_max_connections).await?;
    let mut migrator = sqlx::migrate!("./migrations");
    migrator.set_ignore_missing(config.ignore_missing_migrations);
    migrator.run(&db).await?;

    let redis = redis::Client::open(config.redis_url.clone())?;
    let rate_limiter = Arc::new(RateLimiter::new(
        Arc::new(FixedWindowStore::new(RedisWindowCounter::new(redis))),
        config.rate_limit_max,
        config.rate_limit_window_seconds,
    ));
    if !rate_limiter.enabled() {
        tracing::warn!("Rate limiting disabled (RATE_LIMIT_MAX=0)");
    }

    let token_manager = Arc::new(JwtTokenManager::new(
        config.access_token_key.clone(),
        config.refresh_token_key.clone(),
        config.access_token_age,
        config.refresh_token_age,
    ));

    let state = AppState {
        db: db.clone(),
        config: config.clone(),
        user_repo: Arc::new(SqlxUserRepository::new(db.clone())),
        authentication_repo: Arc::new(SqlxAuthenticationRepository::new(db.clone())),
        thread_repo: Arc::new(SqlxThreadRepository::new(db.clone())),
        comment_repo: Arc::new(SqlxCommentRepository::new(db.clone())),
        reply_repo: Arc::new(SqlxReplyRepository::new(db.clone())),
        comment_likes_repo: Arc::new(SqlxCommentLikesRepository::new(db.clone())),
        password_hash: Arc::new(BcryptPasswordHash::default()),
        token_manager,
        rate_limiter,
    };

    let allowed_methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let base_cors = if cfg!(debug_assertions) {
        CorsLayer::new().allow_origin(tower_http::cors::Any)
    } else {
        let origins = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    };
    let cors = base_cors
        .allow_methods(allowed_methods)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let app = create_router(state)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Forum API listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
