use contracts::domain::a105_sale::aggregate::{Sale, SaleDto, SaleId};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils;

/// Sales with their embedded product snapshots
pub async fn fetch_sales() -> Result<Vec<Sale>, ApiError> {
    api_utils::fetch_all::<Sale>().await
}

pub async fn save_sale(dto: &SaleDto) -> Result<(), ApiError> {
    api_utils::save::<Sale, _>(dto.id, dto).await
}

pub async fn delete_sale(id: SaleId) -> Result<(), ApiError> {
    api_utils::delete::<Sale>(id).await
}
