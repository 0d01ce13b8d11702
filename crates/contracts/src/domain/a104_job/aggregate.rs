use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::aggregate_id::aggregate_id;
use crate::domain::common::AggregateRoot;

aggregate_id!(
    /// Job opening primary key (`id_trabajo`)
    JobId
);

/// Job opening published on the careers page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "id_trabajo")]
    pub id: JobId,
    #[serde(rename = "nombre_trabajo")]
    pub title: String,
    #[serde(rename = "fecha_publicacion")]
    pub published_on: NaiveDate,
    #[serde(rename = "descripcion", default)]
    pub description: String,
}

impl AggregateRoot for Job {
    type Id = JobId;

    fn collection_name() -> &'static str {
        "trabajos"
    }

    fn list_name() -> &'static str {
        "Careers"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDto {
    #[serde(skip)]
    pub id: Option<JobId>,
    #[serde(rename = "nombre_trabajo")]
    pub title: String,
    #[serde(rename = "fecha_publicacion")]
    pub published_on: NaiveDate,
    #[serde(rename = "descripcion")]
    pub description: String,
}

impl JobDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Job title is required".into());
        }
        Ok(())
    }
}

impl From<&Job> for JobDto {
    fn from(j: &Job) -> Self {
        Self {
            id: Some(j.id),
            title: j.title.clone(),
            published_on: j.published_on,
            description: j.description.clone(),
        }
    }
}
