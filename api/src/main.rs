//! Delivery API Server
//!
//! REST API for clients and their deliveries, with field validation and
//! filtered lookups by CPF, name and city.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    http::{header, Method},
    routing::{get, patch},
    Json, Router,
};
use sea_orm::{ConnectOptions, Database};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{ensure_schema, PostgresClientRepository, PostgresDeliveryRepository};
use app::{ClientService, DeliveryService};
use config::Config;
use domain::ports::{ClientRepository, DeliveryRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub client_service: Arc<ClientService<dyn ClientRepository>>,
    pub delivery_service: Arc<DeliveryService<dyn DeliveryRepository>>,
}

impl AppState {
    pub fn new(clients: Arc<dyn ClientRepository>, deliveries: Arc<dyn DeliveryRepository>) -> Self {
        Self {
            client_service: Arc::new(ClientService::new(clients)),
            delivery_service: Arc::new(DeliveryService::new(deliveries)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(12 * 60 * 60))
}

/// Build the HTTP router: resource routes under `/api/v1`, health at the root
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Clients
        .route(
            "/clients",
            get(handlers::list_clients).post(handlers::create_client),
        )
        .route("/clients/count", get(handlers::count_clients))
        .route("/clients/cpf/:cpf", get(handlers::get_client_by_cpf))
        .route("/clients/name/:name", get(handlers::search_clients_by_name))
        .route(
            "/clients/:id",
            get(handlers::get_client)
                .put(handlers::update_client)
                .delete(handlers::delete_client),
        )
        // Deliveries
        .route(
            "/deliveries",
            get(handlers::list_deliveries).post(handlers::create_delivery),
        )
        .route(
            "/deliveries/client/cpf/:cpf",
            get(handlers::deliveries_by_client_cpf),
        )
        .route(
            "/deliveries/client/name/:name",
            get(handlers::deliveries_by_client_name),
        )
        .route("/deliveries/city/:city", get(handlers::deliveries_by_city))
        .route(
            "/deliveries/:id",
            get(handlers::get_delivery)
                .put(handlers::update_delivery)
                .delete(handlers::delete_delivery),
        )
        .route(
            "/deliveries/:id/status",
            patch(handlers::update_delivery_status),
        );

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,delivery_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting delivery API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.max_connections(config.database_max_connections);
    let db = Database::connect(options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.auto_migrate {
        ensure_schema(&db)
            .await
            .context("Failed to create database schema")?;
    }

    // Create adapters
    let client_repo: Arc<dyn ClientRepository> =
        Arc::new(PostgresClientRepository::new(db.clone()));
    let delivery_repo: Arc<dyn DeliveryRepository> =
        Arc::new(PostgresDeliveryRepository::new(db.clone()));

    let app = build_router(AppState::new(client_repo, delivery_repo));

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
