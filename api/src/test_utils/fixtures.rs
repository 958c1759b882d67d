//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture produces input that passes validation unless a test changes it.

use chrono::NaiveDate;

use crate::domain::entities::{Address, DeliveryInput, NewClient};

/// Valid client input with the given name and CPF
pub fn test_client_input(name: &str, cpf: &str) -> NewClient {
    NewClient {
        name: name.to_string(),
        cpf: cpf.to_string(),
        cnpj: "12.345.678/0001-90".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        email: "joao@example.com".to_string(),
        phone: "(11) 91234-5678".to_string(),
    }
}

/// Valid client input, with a CNPJ derived from `seq` so several can coexist
pub fn test_client_numbered(name: &str, seq: u32) -> NewClient {
    let mut client = test_client_input(name, &format!("123.456.{:03}-00", seq % 1000));
    client.cnpj = format!("12.345.{:03}/0001-90", seq % 1000);
    client
}

/// Valid address in the given city
pub fn test_address(city: &str) -> Address {
    Address {
        street: "Rua das Flores".to_string(),
        number: "100".to_string(),
        neighborhood: "Centro".to_string(),
        complement: "Apto 12".to_string(),
        city: city.to_string(),
        state: "SP".to_string(),
        country: "Brasil".to_string(),
        latitude: -22.9056,
        longitude: -47.0608,
    }
}

/// Valid delivery input for the given CPF and city, status `Pendente`
pub fn test_delivery_input(cpf: &str, city: &str) -> DeliveryInput {
    DeliveryInput {
        client_cpf: cpf.to_string(),
        client_name: "João Silva".to_string(),
        test_name: "Caixa pequena".to_string(),
        weight: 2.5,
        address: test_address(city),
        order_status: "Pendente".to_string(),
    }
}

/// JSON body for `POST /clients`
pub fn client_json(name: &str, seq: u32) -> serde_json::Value {
    serde_json::to_value(test_client_numbered(name, seq)).unwrap()
}

/// JSON body for `POST /deliveries`
pub fn delivery_json(cpf: &str, client_name: &str, city: &str) -> serde_json::Value {
    let mut input = test_delivery_input(cpf, city);
    input.client_name = client_name.to_string();
    serde_json::to_value(input).unwrap()
}
