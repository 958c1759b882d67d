//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod client;
pub mod delivery;

pub use client::{Client, ClientId, NewClient};
pub use delivery::{Address, Delivery, DeliveryId, DeliveryInput, NewDelivery, OrderStatus};
