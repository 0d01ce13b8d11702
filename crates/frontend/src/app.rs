use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    log::debug!("API base: '{}'", crate::shared::api_utils::api_base());

    view! {
        <AppRoutes />
    }
}
