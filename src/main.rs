//! Authgate - Role-based authentication service
//! Mission: Issue and verify signed session tokens, serve role-scoped resources

use anyhow::{Context, Result};
use dotenv::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use authgate::auth::{
    api, AuthService, AuthState, ResourceCatalog, SystemClock, TokenCodec, UserStore,
};
use authgate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    load_env();
    init_tracing();

    info!("🚀 Authgate starting");

    let config = Config::from_env().context("Invalid configuration")?;

    let user_store = Arc::new(UserStore::new(&config.db_path)?);
    info!("🔐 Credential store ready at: {}", config.db_path);

    let codec = Arc::new(TokenCodec::new(
        &config.jwt_secret,
        config.token_ttl_secs,
        Arc::new(SystemClock),
    ));
    let catalog = Arc::new(ResourceCatalog::default());
    let service = Arc::new(AuthService::new(user_store, codec, catalog));

    let app = api::router(AuthState { service });

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("🎯 Auth API listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn load_env() {
    // Standard dotenv search (cwd + parents), then the manifest dir for
    // runs launched with --manifest-path from elsewhere.
    let _ = dotenv();

    let manifest_env = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    if manifest_env.exists() {
        let _ = dotenv::from_path(&manifest_env);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "authgate=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
