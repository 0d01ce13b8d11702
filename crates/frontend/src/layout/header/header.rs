use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::config::app_config;
use crate::shared::icons::icon;
use crate::system::auth::api;
use crate::system::auth::context::use_session;

/// (path, label) of the top navigation
const NAV_ITEMS: &[(&str, &str)] = &[
    ("/products", "Products"),
    ("/services", "Services"),
    ("/news", "News"),
    ("/careers", "Careers"),
    ("/sales", "Sales"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let session = use_session();
    let navigate = use_navigate();

    let handle_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::logout().await {
                Ok(()) => navigate(&app_config().routes.login, Default::default()),
                Err(e) => log::error!("Logout failed: {}", e),
            }
        });
    };

    let nav_links = move || {
        NAV_ITEMS
            .iter()
            .map(|(href, label)| {
                view! {
                    <A href=*href attr:class="header__link" on:click=move |_| set_menu_open.set(false)>
                        {*label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__title">"TOSHIBA"</A>
                <nav class=move || if menu_open.get() { "header__nav header__nav--open" } else { "header__nav" }>
                    {nav_links}
                </nav>
            </div>
            <div class="header__actions">
                {move || session.and_then(|s| s.username()).map(|name| view! {
                    <span class="header__user">{name}</span>
                })}
                <Show when=move || session.map(|s| s.is_staff()).unwrap_or(false)>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>"Staff"</Badge>
                </Show>
                <button class="button button--ghost" on:click=handle_logout>
                    {icon("logout")}
                    " Logout"
                </button>
                <button
                    class="button button--ghost header__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </header>
    }
}
