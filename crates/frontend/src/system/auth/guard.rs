use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::NavigateOptions;

use super::context::SessionContext;
use super::session::{probe_for_mount, HttpSessionProbe, MountToken, RenderDecision, SessionGuard};
use crate::shared::config::app_config;

/// Component that requires an authenticated session.
///
/// Every mount starts unknown and renders nothing until its single session
/// probe resolves; then it either renders `children` or redirects to the
/// login route without leaving the guarded page in history.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let guard = RwSignal::new(SessionGuard::new());
    let mount = MountToken::new();

    on_cleanup({
        let mount = mount.clone();
        move || mount.cancel()
    });

    if guard.try_update(|g| g.begin_probe()).unwrap_or(false) {
        spawn_local(async move {
            if let Some(outcome) = probe_for_mount(&HttpSessionProbe, &mount).await {
                guard.try_update(|g| g.resolve(outcome));
            }
        });
    }

    provide_context(SessionContext {
        user: Signal::derive(move || guard.with(|g| g.user().cloned())),
    });

    let login_path = app_config().routes.login.clone();

    view! {
        {move || match guard.with(|g| g.render()) {
            RenderDecision::Nothing => ().into_any(),
            RenderDecision::RedirectToLogin => view! {
                <Redirect
                    path=login_path.clone()
                    options=NavigateOptions {
                        replace: true,
                        ..Default::default()
                    }
                />
            }
            .into_any(),
            RenderDecision::Children => children().into_any(),
        }}
    }
}
