use contracts::domain::a101_product::aggregate::{Product, ProductDto, ProductId};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils;

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    api_utils::fetch_all::<Product>().await
}

/// Create when the dto carries no id, update otherwise
pub async fn save_product(dto: &ProductDto) -> Result<(), ApiError> {
    api_utils::save::<Product, _>(dto.id, dto).await
}

pub async fn delete_product(id: ProductId) -> Result<(), ApiError> {
    api_utils::delete::<Product>(id).await
}
