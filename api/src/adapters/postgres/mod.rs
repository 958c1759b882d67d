//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod client_repo;
pub mod delivery_repo;
mod filters;
pub mod schema;


pub use client_repo::PostgresClientRepository;
pub use delivery_repo::PostgresDeliveryRepository;
pub use schema::ensure_schema;
