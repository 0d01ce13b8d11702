use contracts::domain::a102_service::aggregate::{Service, ServiceDto, ServiceId};
use leptos::prelude::*;

use crate::domain::a102_service::api;
use crate::shared::number_format::parse_money;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceForm {
    pub id: Option<ServiceId>,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl ServiceForm {
    pub fn from_service(service: &Service) -> Self {
        Self {
            id: Some(service.id),
            name: service.name.clone(),
            price: service.price.to_string(),
            description: service.description.clone(),
        }
    }

    pub fn to_dto(&self) -> Result<ServiceDto, String> {
        let dto = ServiceDto {
            id: self.id,
            name: self.name.trim().to_string(),
            price: parse_money(&self.price)?,
            description: self.description.trim().to_string(),
        };
        dto.validate()?;
        Ok(dto)
    }
}

#[derive(Clone, Copy)]
pub struct ServiceDetailsViewModel {
    pub form: RwSignal<ServiceForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ServiceDetailsViewModel {
    pub fn new(service: Option<&Service>) -> Self {
        let form = service.map(ServiceForm::from_service).unwrap_or_default();
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
        let dto = match self.form.with_untracked(ServiceForm::to_dto) {
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
            match api::save_service(&dto).await {
                Ok(()) => {
                    log::info!("Saved service '{}'", dto.name);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save service: {}", e);
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

    #[test]
    fn test_to_dto() {
        let form = ServiceForm {
            id: Some(ServiceId(3)),
            name: "Installation".to_string(),
            price: "$49.90".to_string(),
            description: String::new(),
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.id, Some(ServiceId(3)));
        assert_eq!(dto.price, Decimal::new(4990, 2));
    }

    #[test]
    fn test_to_dto_requires_name_and_price() {
        let mut form = ServiceForm {
            price: "10".to_string(),
            ..Default::default()
        };
        assert_eq!(form.to_dto().unwrap_err(), "Service name is required");

        form.name = "Repair".to_string();
        form.price = String::new();
        assert!(form.to_dto().is_err());
    }
}
