//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod clients;
pub mod deliveries;

pub use clients::{
    count_clients, create_client, delete_client, get_client, get_client_by_cpf, list_clients,
    search_clients_by_name, update_client,
};
pub use deliveries::{
    create_delivery, deliveries_by_city, deliveries_by_client_cpf, deliveries_by_client_name,
    delete_delivery, get_delivery, list_deliveries, update_delivery, update_delivery_status,
};
