//! SeaORM table models
//!
//! Row-level mirrors of the `clients` and `deliveries` tables. Deliveries
//! reference clients by CPF value only, so no relation is declared.

pub mod clients;
pub mod deliveries;
