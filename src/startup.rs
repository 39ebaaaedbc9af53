//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::compression::CompressionLayer;

use crate::application::services::{
    CategoryService, CategoryServiceImpl, ProductService, ProductServiceImpl,
};
use crate::config::{PaginationSettings, Settings, StorageBackend};
use crate::infrastructure::database;
use crate::infrastructure::memory::{
    InMemoryCategoryRepository, InMemoryProductRepository, InMemoryStore,
};
use crate::infrastructure::repositories::{PgCategoryRepository, PgProductRepository};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};

/// Backing store behind the repositories, kept for readiness checks.
#[derive(Clone)]
pub enum Storage {
    Postgres(PgPool),
    Memory(Arc<InMemoryStore>),
}

impl Storage {
    pub fn name(&self) -> &'static str {
        match self {
            Storage::Postgres(_) => "postgres",
            Storage::Memory(_) => "memory",
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<dyn CategoryService>,
    pub product_service: Arc<dyn ProductService>,
    pub storage: Storage,
    pub pagination: PaginationSettings,
}

impl AppState {
    /// State backed by PostgreSQL repositories.
    pub fn with_postgres(pool: PgPool, pagination: PaginationSettings) -> Self {
        let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));
        let product_repo = Arc::new(PgProductRepository::new(pool.clone()));

        Self {
            category_service: Arc::new(CategoryServiceImpl::new(category_repo.clone())),
            product_service: Arc::new(ProductServiceImpl::new(product_repo, category_repo)),
            storage: Storage::Postgres(pool),
            pagination,
        }
    }

    /// State backed by an in-memory store.
    pub fn with_memory_store(store: Arc<InMemoryStore>, pagination: PaginationSettings) -> Self {
        let category_repo = Arc::new(InMemoryCategoryRepository::new(store.clone()));
        let product_repo = Arc::new(InMemoryProductRepository::new(store.clone()));

        Self {
            category_service: Arc::new(CategoryServiceImpl::new(category_repo.clone())),
            product_service: Arc::new(ProductServiceImpl::new(product_repo, category_repo)),
            storage: Storage::Memory(store),
            pagination,
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let state = match settings.storage.backend {
            StorageBackend::Postgres => {
                let db = database::create_pool(&settings.database)
                    .await
                    .context("failed to connect to database")?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&db)
                        .await
                        .context("failed to run migrations")?;
                    tracing::info!("Database migrations applied");
                }

                AppState::with_postgres(db, settings.pagination)
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on shutdown");
                AppState::with_memory_store(Arc::new(InMemoryStore::seeded()), settings.pagination)
            }
        };

        let router = build_router(state, &settings);

        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .with_context(|| format!("invalid server address {}", settings.server_addr()))?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Routes plus the outer middleware stack.
pub fn build_router(state: AppState, settings: &Settings) -> Router {
    routes::create_router(state)
        .layer(CompressionLayer::new())
        .layer(logging::create_trace_layer())
        .layer(cors::create_cors_layer(&settings.cors))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
