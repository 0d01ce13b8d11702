use contracts::domain::a101_product::aggregate::{Product, ProductDto, ProductId};
use leptos::prelude::*;

use crate::domain::a101_product::api;
use crate::shared::number_format::{parse_count, parse_money};

/// Raw text of the product form inputs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductForm {
    pub id: Option<ProductId>,
    pub name: String,
    pub price: String,
    pub description: String,
    pub stock: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            price: product.unit_price.to_string(),
            description: product.description.clone(),
            stock: product.stock.to_string(),
        }
    }

    /// Parse the inputs into a write dto; an empty stock field means zero
    pub fn to_dto(&self) -> Result<ProductDto, String> {
        let stock = if self.stock.trim().is_empty() {
            0
        } else {
            parse_count(&self.stock)?
        };
        let dto = ProductDto {
            id: self.id,
            name: self.name.trim().to_string(),
            unit_price: parse_money(&self.price)?,
            description: self.description.trim().to_string(),
            stock,
        };
        dto.validate()?;
        Ok(dto)
    }
}

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(product: Option<&Product>) -> Self {
        let form = product.map(ProductForm::from_product).unwrap_or_default();
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
        self.form
            .with(|f| !f.name.trim().is_empty() && !f.price.trim().is_empty())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = match self.form.with_untracked(ProductForm::to_dto) {
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
            match api::save_product(&dto).await {
                Ok(()) => {
                    log::info!("Saved product '{}'", dto.name);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save product: {}", e);
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
    use rust_decimal::Decimal;

    fn form(name: &str, price: &str, stock: &str) -> ProductForm {
        ProductForm {
            id: None,
            name: name.to_string(),
            price: price.to_string(),
            description: "  55 inch  ".to_string(),
            stock: stock.to_string(),
        }
    }

    #[test]
    fn test_to_dto_parses_and_trims() {
        let dto = form(" TV ", "1,299.99", "4").to_dto().unwrap();
        assert_eq!(dto.name, "TV");
        assert_eq!(dto.unit_price, Decimal::new(129999, 2));
        assert_eq!(dto.description, "55 inch");
        assert_eq!(dto.stock, 4);
        assert_eq!(dto.id, None);
    }

    #[test]
    fn test_blank_stock_is_zero() {
        assert_eq!(form("TV", "10", " ").to_dto().unwrap().stock, 0);
    }

    #[test]
    fn test_to_dto_rejects_bad_input() {
        assert!(form("", "10", "1").to_dto().is_err());
        assert!(form("TV", "ten", "1").to_dto().is_err());
        assert!(form("TV", "-5", "1").to_dto().is_err());
        assert!(form("TV", "5", "-1").to_dto().is_err());
    }

    #[test]
    fn test_from_product_keeps_id() {
        let product = Product {
            id: ProductId(7),
            name: "Laptop".to_string(),
            unit_price: Decimal::new(150000, 2),
            description: String::new(),
            stock: 3,
        };
        let form = ProductForm::from_product(&product);
        assert_eq!(form.price, "1500.00");
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.id, Some(ProductId(7)));
        assert_eq!(dto, ProductDto::from(&product));
    }
}
