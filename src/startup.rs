//! Application Startup
//!
//! Composition root: picks the repository backend from settings, wires it
//! into the shared state, and builds the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::config::{RepositoryBackend, Settings};
use crate::domain::UserRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{InMemoryUserRepository, PgUserRepository};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging, metrics};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Repository chosen at startup; handlers are built around it per request
    pub users: Arc<dyn UserRepository>,
    /// Present only for the postgres backend
    pub db: Option<PgPool>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, db: Option<PgPool>, settings: Settings) -> Self {
        Self {
            users,
            db,
            settings: Arc::new(settings),
        }
    }

    pub fn backend(&self) -> RepositoryBackend {
        self.settings.repository.backend
    }
}

/// Build the repository adapter selected by `repository.backend`.
pub async fn build_repository(
    settings: &Settings,
) -> Result<(Arc<dyn UserRepository>, Option<PgPool>)> {
    match settings.repository.backend {
        RepositoryBackend::Memory => {
            tracing::warn!("Using in-memory user repository; data is lost on restart");
            let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
            Ok((users, None))
        }
        RepositoryBackend::Postgres => {
            let pool = database::create_pool(&settings.database)
                .await
                .context("failed to connect to PostgreSQL")?;
            tracing::info!("Database connection pool created");

            if settings.database.run_migrations {
                database::run_migrations(&pool)
                    .await
                    .context("failed to run migrations")?;
                tracing::info!("Database migrations applied");
            }

            let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));
            Ok((users, Some(pool)))
        }
    }
}

/// Build the router with all middleware applied.
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);

    // Each layer wraps the previous one; CORS ends up outermost
    routes::create_router(state)
        .layer(axum::middleware::from_fn(metrics::track_metrics))
        .layer(logging::create_trace_layer())
        .layer(cors)
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

        let (users, db) = build_repository(&settings).await?;
        tracing::info!(backend = %settings.repository.backend, "User repository ready");

        let addr = settings.server_addr();
        let state = AppState::new(users, db, settings);
        let router = build_router(state);

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
