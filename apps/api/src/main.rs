mod config;
mod content;
mod errors;
mod layout;
mod models;
mod render;
mod routes;
mod state;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, ContentBackend};
use crate::content::{ContentStore, FsContentStore, S3ContentStore};
use crate::routes::build_router;
use crate::state::{AppState, ResumeSettings};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting résumé API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the content store
    let store: Arc<dyn ContentStore> = match &config.content {
        ContentBackend::Filesystem { root } => {
            info!("Content store: filesystem at {root}");
            Arc::new(FsContentStore::new(root))
        }
        ContentBackend::S3 {
            bucket,
            endpoint,
            prefix,
            access_key_id,
            secret_access_key,
        } => {
            let client = build_s3_client(endpoint, access_key_id, secret_access_key).await;
            info!("Content store: s3://{bucket}/{prefix}");
            Arc::new(S3ContentStore::new(client, bucket.clone(), prefix.clone()))
        }
    };

    // Build app state
    let state = AppState {
        store,
        resume: Arc::new(ResumeSettings {
            entry_id: config.resume_entry_id.clone(),
            identity: config.identity(),
            placeholders: config.placeholder_values(),
        }),
    };
    info!("Serving résumé entry '{}'", config.resume_entry_id);

    // Build router
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(
    endpoint: &str,
    access_key_id: &str,
    secret_access_key: &str,
) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(access_key_id, secret_access_key, None, None, "resume-static");

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(endpoint)
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&s3_config)
        .force_path_style(true)
        .build();
    aws_sdk_s3::Client::from_conf(s3_config)
}
