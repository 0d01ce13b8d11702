use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM class="not-found">
            <div class="not-found__code">"404"</div>
            <h1 class="page__title">"Page Not Found"</h1>
            <p>"The page you tried to access doesn't exist:"</p>
            <p class="not-found__path">{move || location.pathname.get()}</p>
            <A href="/" attr:class="button button--primary">"Return to Home"</A>
        </PageFrame>
    }
}
