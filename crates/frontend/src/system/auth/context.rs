use contracts::system::auth::UserInfo;
use leptos::prelude::*;

/// Session of the signed-in user, scoped to a guarded subtree.
///
/// Provided by [`ProtectedRoute`](super::guard::ProtectedRoute) once its probe
/// succeeded; there is no browser-global "current user".
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: Signal<Option<UserInfo>>,
}

impl SessionContext {
    pub fn username(&self) -> Option<String> {
        self.user.with(|u| u.as_ref().map(|u| u.username.clone()))
    }

    pub fn is_staff(&self) -> bool {
        self.user.with(|u| u.as_ref().map(|u| u.is_staff).unwrap_or(false))
    }
}

/// Hook to access the session; `None` outside a guarded subtree
pub fn use_session() -> Option<SessionContext> {
    use_context::<SessionContext>()
}
