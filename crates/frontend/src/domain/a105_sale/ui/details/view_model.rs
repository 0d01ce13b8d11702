use chrono::NaiveDate;
use contracts::domain::a101_product::aggregate::{Product, ProductId};
use contracts::domain::a105_sale::aggregate::{Sale, SaleDto, SaleId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::domain::a105_sale::api;
use crate::shared::date_utils::{parse_input_date, to_input_value, today};
use crate::shared::number_format::parse_count;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SaleForm {
    pub id: Option<SaleId>,
    pub name: String,
    /// Value of the product `<select>`; empty until a product is picked
    pub product_id: String,
    pub quantity: String,
    pub date: String,
}

impl SaleForm {
    pub fn dated(date: NaiveDate) -> Self {
        Self {
            quantity: "1".to_string(),
            date: to_input_value(date),
            ..Default::default()
        }
    }

    pub fn from_sale(sale: &Sale) -> Self {
        Self {
            id: Some(sale.id),
            name: sale.name.clone(),
            product_id: sale.product.id.as_string(),
            quantity: sale.quantity.to_string(),
            date: to_input_value(sale.date),
        }
    }

    pub fn selected_product(&self) -> Result<ProductId, String> {
        if self.product_id.trim().is_empty() {
            return Err("Select a product".to_string());
        }
        ProductId::from_string(&self.product_id)
    }

    pub fn to_dto(&self) -> Result<SaleDto, String> {
        let dto = SaleDto {
            id: self.id,
            name: self.name.trim().to_string(),
            product_id: self.selected_product()?,
            quantity: parse_count(&self.quantity)?,
            date: parse_input_date(&self.date)?,
        };
        dto.validate()?;
        Ok(dto)
    }

    /// Value of the sale at the picked product's current price
    pub fn preview_value(&self, products: &[Product]) -> Option<Decimal> {
        let product_id = self.selected_product().ok()?;
        let quantity = parse_count(&self.quantity).ok()?;
        products
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| p.unit_price * Decimal::from(quantity))
    }
}

#[derive(Clone, Copy)]
pub struct SaleDetailsViewModel {
    pub form: RwSignal<SaleForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl SaleDetailsViewModel {
    pub fn new(sale: Option<&Sale>) -> Self {
        let form = match sale {
            Some(sale) => SaleForm::from_sale(sale),
            None => SaleForm::dated(today()),
        };
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.id.is_some())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| {
            !f.name.trim().is_empty() && !f.product_id.is_empty() && !f.date.is_empty()
        })
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = match self.form.with_untracked(SaleForm::to_dto) {
            Ok(dto) => dto,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save_sale(&dto).await {
                Ok(()) => {
                    log::info!("Saved sale '{}' ({} x product {})", dto.name, dto.quantity, dto.product_id);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save sale: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: i64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("P{}", id),
            unit_price: Decimal::new(price, 0),
            description: String::new(),
            stock: 0,
        }
    }

    fn filled() -> SaleForm {
        SaleForm {
            id: None,
            name: "Order 17".to_string(),
            product_id: "2".to_string(),
            quantity: "3".to_string(),
            date: "2024-02-01".to_string(),
        }
    }

    #[test]
    fn test_dated_form_defaults_to_one_unit() {
        let form = SaleForm::dated(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(form.quantity, "1");
        assert_eq!(form.date, "2024-01-15");
        assert_eq!(form.product_id, "");
    }

    #[test]
    fn test_to_dto_references_product_by_id() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.product_id, ProductId(2));
        assert_eq!(dto.quantity, 3);
        assert_eq!(dto.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_to_dto_validation() {
        let mut form = filled();
        form.product_id = String::new();
        assert_eq!(form.to_dto().unwrap_err(), "Select a product");

        let mut form = filled();
        form.quantity = "0".to_string();
        assert_eq!(form.to_dto().unwrap_err(), "Quantity must be at least 1");

        let mut form = filled();
        form.date = "02/01/2024".to_string();
        assert!(form.to_dto().is_err());
    }

    #[test]
    fn test_preview_value() {
        let products = vec![product(1, 10), product(2, 20)];
        assert_eq!(filled().preview_value(&products), Some(Decimal::new(60, 0)));

        let mut form = filled();
        form.product_id = "9".to_string();
        assert_eq!(form.preview_value(&products), None);
    }
}
