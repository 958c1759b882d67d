//! Client domain entity
//!
//! A registered customer identified by CPF. Deliveries are attached by CPF
//! equality, not by a stored reference.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::delivery::Delivery;

/// Database-generated identifier for a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClientId(pub i64);

impl From<i64> for ClientId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A client with its deliveries attached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub cpf: String,
    pub cnpj: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone: String,
    pub deliveries: Vec<Delivery>,
}

impl Client {
    /// Build a client from its stored fields, with no deliveries attached yet
    pub fn from_parts(id: ClientId, data: NewClient) -> Self {
        Client {
            id,
            name: data.name,
            cpf: data.cpf,
            cnpj: data.cnpj,
            birth_date: data.birth_date,
            email: data.email,
            phone: data.phone,
            deliveries: Vec::new(),
        }
    }
}

/// Client fields as written by callers (create and full update)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub cpf: String,
    pub cnpj: String,
    #[serde(deserialize_with = "birth_date::deserialize")]
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone: String,
}

/// Accepts either a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp.
mod birth_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de::Error, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date);
        }

        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .map_err(|_| {
                D::Error::custom(format!(
                    "invalid birth_date '{}', expected YYYY-MM-DD or an RFC 3339 timestamp",
                    raw
                ))
            })
    }
}
