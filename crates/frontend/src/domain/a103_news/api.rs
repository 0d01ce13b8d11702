use contracts::domain::a103_news::aggregate::{News, NewsDto, NewsId};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils;

pub async fn fetch_news() -> Result<Vec<News>, ApiError> {
    api_utils::fetch_all::<News>().await
}

pub async fn save_news(dto: &NewsDto) -> Result<(), ApiError> {
    api_utils::save::<News, _>(dto.id, dto).await
}

pub async fn delete_news(id: NewsId) -> Result<(), ApiError> {
    api_utils::delete::<News>(id).await
}
