//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services validate input and coordinate with the repository ports.

pub mod client_service;
pub mod delivery_service;

pub use client_service::ClientService;
pub use delivery_service::DeliveryService;
