use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::aggregate_id::aggregate_id;
use crate::domain::common::AggregateRoot;

// ============================================================================
// ID Type
// ============================================================================

aggregate_id!(
    /// Product primary key (`id_producto`)
    ProductId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalogue product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "id_producto")]
    pub id: ProductId,

    #[serde(rename = "nombre_producto")]
    pub name: String,

    /// Current unit price. Sales embed a snapshot of the product, so this is
    /// the price at the time the snapshot was taken.
    #[serde(rename = "precio")]
    pub unit_price: Decimal,

    #[serde(rename = "descripcion", default)]
    pub description: String,

    #[serde(default)]
    pub stock: u32,
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn collection_name() -> &'static str {
        "productos"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Write shape for creating/updating a product
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(skip)]
    pub id: Option<ProductId>,
    #[serde(rename = "nombre_producto")]
    pub name: String,
    #[serde(rename = "precio")]
    pub unit_price: Decimal,
    #[serde(rename = "descripcion")]
    pub description: String,
    pub stock: u32,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name is required".into());
        }
        if self.unit_price.is_sign_negative() {
            return Err("Price cannot be negative".into());
        }
        Ok(())
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            id: Some(p.id),
            name: p.name.clone(),
            unit_price: p.unit_price,
            description: p.description.clone(),
            stock: p.stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_price_accepts_string_and_number() {
        let from_string: Product = serde_json::from_str(
            r#"{"id_producto":1,"nombre_producto":"Laptop","precio":"1299.99","descripcion":"","stock":4}"#,
        )
        .unwrap();
        let from_number: Product = serde_json::from_str(
            r#"{"id_producto":1,"nombre_producto":"Laptop","precio":1299.99,"descripcion":"","stock":4}"#,
        )
        .unwrap();

        assert_eq!(from_string.unit_price, Decimal::from_str("1299.99").unwrap());
        assert_eq!(from_string, from_number);
    }

    #[test]
    fn test_dto_omits_id_on_the_wire() {
        let dto = ProductDto {
            id: Some(ProductId(9)),
            name: "TV".into(),
            unit_price: Decimal::new(49900, 2),
            description: "55 inch".into(),
            stock: 3,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["nombre_producto"], "TV");
        assert_eq!(json["precio"], "499.00");
        assert_eq!(json["stock"], 3);
    }

    #[test]
    fn test_validate() {
        let mut dto = ProductDto {
            name: "Fan".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        dto.unit_price = Decimal::new(-1, 0);
        assert!(dto.validate().is_err());

        dto.unit_price = Decimal::ZERO;
        dto.name = "  ".into();
        assert!(dto.validate().is_err());
    }
}
