//! Delivery domain entity
//!
//! A shipment addressed to a client. The client is referenced by CPF value and
//! the client name is a denormalized copy taken at creation time.

use serde::{Deserialize, Serialize};

/// Database-generated identifier for a delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeliveryId(pub i64);

impl From<i64> for DeliveryId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DeliveryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order status of a delivery
///
/// Any status may follow any other; there is no transition guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Enviado")]
    Shipped,
    #[serde(rename = "Entregue")]
    Delivered,
    #[serde(rename = "Cancelado")]
    Canceled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Canceled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::Shipped => "Enviado",
            OrderStatus::Delivered => "Entregue",
            OrderStatus::Canceled => "Cancelado",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown order status: {}", s))
    }
}

/// Brazilian postal address with coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(alias = "logradouro")]
    pub street: String,
    #[serde(alias = "numero")]
    pub number: String,
    #[serde(alias = "bairro")]
    pub neighborhood: String,
    #[serde(default, alias = "complemento")]
    pub complement: String,
    #[serde(alias = "cidade")]
    pub city: String,
    #[serde(alias = "estado")]
    pub state: String,
    #[serde(alias = "pais")]
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A stored delivery
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delivery {
    pub id: DeliveryId,
    pub client_cpf: String,
    pub client_name: String,
    pub test_name: String,
    pub weight: f64,
    #[serde(flatten)]
    pub address: Address,
    pub order_status: OrderStatus,
}

impl Delivery {
    pub fn from_parts(id: DeliveryId, data: NewDelivery) -> Self {
        Delivery {
            id,
            client_cpf: data.client_cpf,
            client_name: data.client_name,
            test_name: data.test_name,
            weight: data.weight,
            address: data.address,
            order_status: data.order_status,
        }
    }
}

/// Delivery fields as received from callers, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryInput {
    #[serde(alias = "cpf")]
    pub client_cpf: String,
    pub client_name: String,
    pub test_name: String,
    pub weight: f64,
    #[serde(flatten)]
    pub address: Address,
    pub order_status: String,
}

/// Validated delivery fields, ready to persist
#[derive(Debug, Clone, PartialEq)]
pub struct NewDelivery {
    pub client_cpf: String,
    pub client_name: String,
    pub test_name: String,
    pub weight: f64,
    pub address: Address,
    pub order_status: OrderStatus,
}
