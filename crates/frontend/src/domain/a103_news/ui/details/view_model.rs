use chrono::NaiveDate;
use contracts::domain::a103_news::aggregate::{News, NewsDto, NewsId};
use leptos::prelude::*;

use crate::domain::a103_news::api;
use crate::shared::date_utils::{parse_input_date, to_input_value, today};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsForm {
    pub id: Option<NewsId>,
    pub title: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`
    pub date: String,
    pub description: String,
}

impl NewsForm {
    /// Blank form dated `date`
    pub fn dated(date: NaiveDate) -> Self {
        Self {
            date: to_input_value(date),
            ..Default::default()
        }
    }

    pub fn from_news(news: &News) -> Self {
        Self {
            id: Some(news.id),
            title: news.title.clone(),
            date: to_input_value(news.date),
            description: news.description.clone(),
        }
    }

    pub fn to_dto(&self) -> Result<NewsDto, String> {
        let dto = NewsDto {
            id: self.id,
            title: self.title.trim().to_string(),
            date: parse_input_date(&self.date)?,
            description: self.description.trim().to_string(),
        };
        dto.validate()?;
        Ok(dto)
    }
}

#[derive(Clone, Copy)]
pub struct NewsDetailsViewModel {
    pub form: RwSignal<NewsForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl NewsDetailsViewModel {
    pub fn new(news: Option<&News>) -> Self {
        let form = match news {
            Some(news) => NewsForm::from_news(news),
            None => NewsForm::dated(today()),
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
        self.form
            .with(|f| !f.title.trim().is_empty() && !f.date.is_empty())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = match self.form.with_untracked(NewsForm::to_dto) {
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
            match api::save_news(&dto).await {
                Ok(()) => {
                    log::info!("Saved news item '{}'", dto.title);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save news item: {}", e);
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

    #[test]
    fn test_dated_form_prefills_date() {
        let form = NewsForm::dated(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(form.date, "2024-03-05");
        assert!(form.id.is_none());
    }

    #[test]
    fn test_to_dto() {
        let form = NewsForm {
            id: None,
            title: " New showroom ".to_string(),
            date: "2024-06-01".to_string(),
            description: "Opening downtown".to_string(),
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.title, "New showroom");
        assert_eq!(dto.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_to_dto_rejects_missing_date() {
        let form = NewsForm {
            title: "Untitled".to_string(),
            ..Default::default()
        };
        assert!(form.to_dto().is_err());
    }
}
