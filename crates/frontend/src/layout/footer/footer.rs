use chrono::Datelike;
use leptos::prelude::*;

use crate::shared::date_utils::today;

#[component]
pub fn Footer() -> impl IntoView {
    let year = today().year();

    view! {
        <footer data-zone="footer" class="footer">
            <span>{format!("© {} Toshiba Corporation. All rights reserved.", year)}</span>
            <span class="footer__tagline">"Committed to People, Committed to the Future"</span>
        </footer>
    }
}
