use contracts::domain::a102_service::aggregate::{Service, ServiceDto, ServiceId};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils;

pub async fn fetch_services() -> Result<Vec<Service>, ApiError> {
    api_utils::fetch_all::<Service>().await
}

pub async fn save_service(dto: &ServiceDto) -> Result<(), ApiError> {
    api_utils::save::<Service, _>(dto.id, dto).await
}

pub async fn delete_service(id: ServiceId) -> Result<(), ApiError> {
    api_utils::delete::<Service>(id).await
}
