//! HTTP surface: public catalog reads, admin CRUD and media.

pub mod admin;
pub mod catalog;
pub mod error;
pub mod health;
pub mod router;
pub mod shutdown;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::content::{seed, BlobStore, ContentStore, DiskBlobStore, MemoryStore, StoreError};
use crate::session::SessionGate;
use crate::ui::carousel::Breakpoints;

pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use shutdown::{ShutdownManager, ShutdownReason};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub blobs: Arc<dyn BlobStore>,
    pub sessions: Arc<SessionGate>,
    pub breakpoints: Breakpoints,
    pub media_dir: PathBuf,
    pub media_prefix: String,
}

impl AppState {
    /// Opens the configured store, seeding the demo catalog into an empty one.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let store: Arc<dyn ContentStore> = match &config.storage.data_file {
            Some(path) => Arc::new(MemoryStore::open(path)?),
            None => Arc::new(MemoryStore::new()),
        };
        seed::seed_if_empty(store.as_ref())?;

        let sessions = SessionGate::new(config.admin.effective_password());
        if !sessions.is_enabled() {
            tracing::warn!("no admin password configured, admin endpoints disabled");
        }

        let storage = &config.storage;
        Ok(Self {
            store,
            blobs: Arc::new(DiskBlobStore::new(
                &storage.media_dir,
                &storage.media_url_prefix,
            )),
            sessions: Arc::new(sessions),
            breakpoints: config.carousel.breakpoint_table(),
            media_dir: storage.media_dir.clone(),
            media_prefix: storage.media_url_prefix.trim_end_matches('/').to_string(),
        })
    }
}

pub struct Server {
    pub addr: SocketAddr,
    /// Bound before `run` so the port is held from startup.
    listener: TcpListener,
    state: AppState,
    shutdown: Arc<ShutdownManager>,
}

impl Server {
    pub async fn bind(addr: &str, state: AppState) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        tracing::info!("Server bound to {}", addr);
        Ok(Self {
            addr,
            listener,
            state,
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serves until Ctrl-C, SIGTERM or [`ServerHandle::shutdown`].
    pub async fn run(self) -> std::io::Result<()> {
        tracing::info!("Starting server on {}", self.addr);

        let app = build_router(self.state);
        let shutdown = self.shutdown.clone();
        axum::serve(self.listener, app)
            .with_graceful_shutdown(async move {
                if let Err(err) = shutdown.wait_for_shutdown().await {
                    tracing::error!(error = %err, "failed to install signal handlers");
                }
            })
            .into_future()
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
