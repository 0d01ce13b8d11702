use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::a101_product::aggregate::{Product, ProductId};
use crate::domain::common::aggregate_id::aggregate_id;
use crate::domain::common::AggregateRoot;

aggregate_id!(
    /// Sale primary key (`id_venta`)
    SaleId
);

/// A recorded sale.
///
/// The product is an embedded snapshot, so `product.unit_price` is the price
/// the sale was made at even if the catalogue price changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(rename = "id_venta")]
    pub id: SaleId,
    #[serde(rename = "nombre_venta")]
    pub name: String,
    #[serde(rename = "producto")]
    pub product: Product,
    /// Always >= 1
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
}

impl Sale {
    /// Monetary value of the sale, derived from the embedded price
    pub fn value(&self) -> Decimal {
        self.product.unit_price * Decimal::from(self.quantity)
    }
}

impl AggregateRoot for Sale {
    type Id = SaleId;

    fn collection_name() -> &'static str {
        "ventas"
    }

    fn list_name() -> &'static str {
        "Sales"
    }
}

/// Write shape for a sale: the product is referenced by id, not embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDto {
    #[serde(skip)]
    pub id: Option<SaleId>,
    #[serde(rename = "nombre_venta")]
    pub name: String,
    #[serde(rename = "producto_id")]
    pub product_id: ProductId,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
}

impl SaleDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Sale name is required".into());
        }
        if self.quantity == 0 {
            return Err("Quantity must be at least 1".into());
        }
        Ok(())
    }
}

impl From<&Sale> for SaleDto {
    fn from(s: &Sale) -> Self {
        Self {
            id: Some(s.id),
            name: s.name.clone(),
            product_id: s.product.id,
            quantity: s.quantity,
            date: s.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALE_JSON: &str = r#"{
        "id_venta": 12,
        "nombre_venta": "Order #12",
        "producto": {
            "id_producto": 3,
            "nombre_producto": "Air purifier",
            "precio": "149.50",
            "descripcion": "",
            "stock": 10
        },
        "cantidad": 2,
        "fecha": "2024-11-30"
    }"#;

    #[test]
    fn test_sale_with_embedded_product() {
        let sale: Sale = serde_json::from_str(SALE_JSON).unwrap();
        assert_eq!(sale.id, SaleId(12));
        assert_eq!(sale.product.id, ProductId(3));
        assert_eq!(sale.date, NaiveDate::from_ymd_opt(2024, 11, 30).unwrap());
        assert_eq!(sale.value(), Decimal::new(29900, 2));
    }

    #[test]
    fn test_dto_references_product_by_id() {
        let sale: Sale = serde_json::from_str(SALE_JSON).unwrap();
        let json = serde_json::to_value(SaleDto::from(&sale)).unwrap();
        assert_eq!(json["producto_id"], 3);
        assert_eq!(json["cantidad"], 2);
        assert_eq!(json["fecha"], "2024-11-30");
        assert!(json.get("producto").is_none());
    }

    #[test]
    fn test_validate_rejects_zero_quantity() {
        let dto = SaleDto {
            id: None,
            name: "x".into(),
            product_id: ProductId(1),
            quantity: 0,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert!(dto.validate().is_err());
    }
}
