//! Field validation for clients and deliveries
//!
//! Pure format and business-rule checks, run before anything is persisted.
//! Checks run in a fixed order and the first failure is reported.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use thiserror::Error;

use super::entities::{DeliveryInput, NewClient, NewDelivery, OrderStatus};

/// Minimum client age, in full years
pub const MIN_CLIENT_AGE: i32 = 18;

/// Minimum client name length, in characters
pub const MIN_NAME_LEN: usize = 3;

// ASCII digit and space classes only; `\d` and `\s` are Unicode-aware here.
static CPF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$").expect("valid CPF pattern")
});

static CNPJ_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{3}\.[0-9]{3}/[0-9]{4}-[0-9]{2}$").expect("valid CNPJ pattern")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?[0-9]{2}\)?(?-u:\s)?[0-9]{4,5}-[0-9]{4}$").expect("valid phone pattern")
});

/// A record failed a validation rule
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("name must be at least 3 characters long")]
    NameTooShort,

    #[error("invalid CPF")]
    InvalidCpf,

    #[error("invalid CNPJ")]
    InvalidCnpj,

    #[error("invalid email format")]
    InvalidEmail,

    #[error("invalid phone format")]
    InvalidPhone,

    #[error("client must be at least 18 years old")]
    Underage,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("weight must be greater than zero")]
    NonPositiveWeight,

    #[error("{0} is out of range")]
    CoordinateOutOfRange(&'static str),

    #[error("invalid order status '{0}', must be one of: 'Pendente', 'Enviado', 'Entregue', 'Cancelado'")]
    InvalidOrderStatus(String),
}

impl FormatError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            FormatError::NameTooShort => "name",
            FormatError::InvalidCpf => "cpf",
            FormatError::InvalidCnpj => "cnpj",
            FormatError::InvalidEmail => "email",
            FormatError::InvalidPhone => "phone",
            FormatError::Underage => "birth_date",
            FormatError::MissingField(field) => *field,
            FormatError::NonPositiveWeight => "weight",
            FormatError::CoordinateOutOfRange(field) => *field,
            FormatError::InvalidOrderStatus(_) => "order_status",
        }
    }
}

pub fn is_valid_cpf(cpf: &str) -> bool {
    CPF_RE.is_match(cpf)
}

pub fn is_valid_cnpj(cnpj: &str) -> bool {
    CNPJ_RE.is_match(cnpj)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Age in full years on `today`
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Validate a client against today's date
pub fn validate_client(client: &NewClient) -> Result<(), FormatError> {
    validate_client_at(client, Utc::now().date_naive())
}

/// Validate a client, computing age as of `today`
pub fn validate_client_at(client: &NewClient, today: NaiveDate) -> Result<(), FormatError> {
    if client.name.trim().chars().count() < MIN_NAME_LEN {
        return Err(FormatError::NameTooShort);
    }
    if !is_valid_cpf(&client.cpf) {
        return Err(FormatError::InvalidCpf);
    }
    if !is_valid_cnpj(&client.cnpj) {
        return Err(FormatError::InvalidCnpj);
    }
    if !is_valid_email(&client.email) {
        return Err(FormatError::InvalidEmail);
    }
    if !is_valid_phone(&client.phone) {
        return Err(FormatError::InvalidPhone);
    }
    if age_on(client.birth_date, today) < MIN_CLIENT_AGE {
        return Err(FormatError::Underage);
    }
    Ok(())
}

/// Validate a delivery and resolve its order status
pub fn validate_delivery(input: &DeliveryInput) -> Result<NewDelivery, FormatError> {
    let required = [
        ("client_cpf", &input.client_cpf),
        ("client_name", &input.client_name),
        ("test_name", &input.test_name),
        ("street", &input.address.street),
        ("number", &input.address.number),
        ("neighborhood", &input.address.neighborhood),
        ("city", &input.address.city),
        ("state", &input.address.state),
        ("country", &input.address.country),
    ];
    if let Some((field, _)) = required
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
    {
        return Err(FormatError::MissingField(field));
    }

    if !(input.weight.is_finite() && input.weight > 0.0) {
        return Err(FormatError::NonPositiveWeight);
    }

    if !(-90.0..=90.0).contains(&input.address.latitude) {
        return Err(FormatError::CoordinateOutOfRange("latitude"));
    }
    if !(-180.0..=180.0).contains(&input.address.longitude) {
        return Err(FormatError::CoordinateOutOfRange("longitude"));
    }

    let order_status = parse_order_status(&input.order_status)?;

    Ok(NewDelivery {
        client_cpf: input.client_cpf.clone(),
        client_name: input.client_name.clone(),
        test_name: input.test_name.clone(),
        weight: input.weight,
        address: input.address.clone(),
        order_status,
    })
}

/// Resolve an order status label
pub fn parse_order_status(raw: &str) -> Result<OrderStatus, FormatError> {
    raw.parse()
        .map_err(|_| FormatError::InvalidOrderStatus(raw.to_string()))
}
