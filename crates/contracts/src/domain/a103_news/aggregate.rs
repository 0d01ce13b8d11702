use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::aggregate_id::aggregate_id;
use crate::domain::common::AggregateRoot;

aggregate_id!(
    /// News item primary key (`id_noticia`)
    NewsId
);

/// Company news item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct News {
    #[serde(rename = "id_noticia")]
    pub id: NewsId,
    #[serde(rename = "nombre_noticia")]
    pub title: String,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "descripcion", default)]
    pub description: String,
}

impl AggregateRoot for News {
    type Id = NewsId;

    fn collection_name() -> &'static str {
        "noticias"
    }

    fn list_name() -> &'static str {
        "News"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsDto {
    #[serde(skip)]
    pub id: Option<NewsId>,
    #[serde(rename = "nombre_noticia")]
    pub title: String,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "descripcion")]
    pub description: String,
}

impl NewsDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".into());
        }
        Ok(())
    }
}

impl From<&News> for NewsDto {
    fn from(n: &News) -> Self {
        Self {
            id: Some(n.id),
            title: n.title.clone(),
            date: n.date,
            description: n.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_wire_format() {
        let news: News = serde_json::from_str(
            r#"{"id_noticia":5,"nombre_noticia":"Launch","fecha":"2024-03-15","descripcion":"x"}"#,
        )
        .unwrap();
        assert_eq!(news.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

        let dto = NewsDto::from(&news);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["fecha"], "2024-03-15");
    }
}
