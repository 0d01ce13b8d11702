use contracts::domain::a104_job::aggregate::{Job, JobDto, JobId};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils;

pub async fn fetch_jobs() -> Result<Vec<Job>, ApiError> {
    api_utils::fetch_all::<Job>().await
}

pub async fn save_job(dto: &JobDto) -> Result<(), ApiError> {
    api_utils::save::<Job, _>(dto.id, dto).await
}

pub async fn delete_job(id: JobId) -> Result<(), ApiError> {
    api_utils::delete::<Job>(id).await
}
