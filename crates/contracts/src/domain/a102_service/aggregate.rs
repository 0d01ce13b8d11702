use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::aggregate_id::aggregate_id;
use crate::domain::common::AggregateRoot;

aggregate_id!(
    /// Service primary key (`id_servicio`)
    ServiceId
);

/// Service offered to customers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "id_servicio")]
    pub id: ServiceId,
    #[serde(rename = "nombre_servicio")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: Decimal,
    #[serde(rename = "descripcion", default)]
    pub description: String,
}

impl AggregateRoot for Service {
    type Id = ServiceId;

    fn collection_name() -> &'static str {
        "servicios"
    }

    fn list_name() -> &'static str {
        "Services"
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceDto {
    #[serde(skip)]
    pub id: Option<ServiceId>,
    #[serde(rename = "nombre_servicio")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: Decimal,
    #[serde(rename = "descripcion")]
    pub description: String,
}

impl ServiceDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Service name is required".into());
        }
        if self.price.is_sign_negative() {
            return Err("Price cannot be negative".into());
        }
        Ok(())
    }
}

impl From<&Service> for ServiceDto {
    fn from(s: &Service) -> Self {
        Self {
            id: Some(s.id),
            name: s.name.clone(),
            price: s.price,
            description: s.description.clone(),
        }
    }
}
