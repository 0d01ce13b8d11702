use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::config::app_config;
use crate::system::auth::api;
use crate::system::auth::session::{signed_in_for_mount, HttpSessionProbe, MountToken};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let navigate = use_navigate();

    // a visitor who still has a live session goes straight home
    let mount = MountToken::new();
    on_cleanup({
        let mount = mount.clone();
        move || mount.cancel()
    });
    spawn_local({
        let navigate = navigate.clone();
        async move {
            if signed_in_for_mount(&HttpSessionProbe, &mount).await {
                log::info!("Session already active, leaving the login page");
                navigate(
                    &app_config().routes.home,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    log::info!("Signed in as '{}'", response.user.username);
                    set_is_loading.set(false);
                    // the guarded home page probes the fresh session itself
                    navigate(&app_config().routes.home, Default::default());
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    let message = match e.status() {
                        Some(_) => e.user_message(),
                        None => "An error occurred during login".to_string(),
                    };
                    set_error_message.set(Some(message));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div id="login--system" data-page-category="system" class="login-container">
            <div class="login-box">
                <h1 class="login-brand">"TOSHIBA"</h1>
                <h2>"Sign in to your account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Committed to People, Committed to the Future"</p>
                </div>
            </div>
        </div>
    }
}
