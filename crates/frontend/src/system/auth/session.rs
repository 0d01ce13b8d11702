//! Session check state machine.
//!
//! A guarded view owns one [`SessionGuard`] per mount. The guard starts in
//! [`AuthState::Unknown`], fires exactly one probe, and settles on
//! `Authenticated` or `Unauthenticated` for the rest of the mount. A probe
//! result that arrives after the view unmounted is dropped.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::system::auth::UserInfo;

use super::api;
use crate::shared::api_error::ApiError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// What one session probe found out.
///
/// `Denied` and `Failed` both end up as [`AuthState::Unauthenticated`]; they
/// are kept apart so logs show whether the API refused the session or could
/// not be asked.
#[derive(Clone, Debug, PartialEq)]
pub enum ProbeOutcome {
    Authenticated(UserInfo),
    /// The API answered 401/403
    Denied,
    /// Network error, unexpected status or unreadable body
    Failed(ApiError),
}

impl ProbeOutcome {
    pub fn from_result(result: Result<UserInfo, ApiError>) -> Self {
        match result {
            Ok(user) => ProbeOutcome::Authenticated(user),
            Err(e) if e.is_unauthorized() => ProbeOutcome::Denied,
            Err(e) => ProbeOutcome::Failed(e),
        }
    }

    pub fn auth_state(&self) -> AuthState {
        match self {
            ProbeOutcome::Authenticated(_) => AuthState::Authenticated,
            ProbeOutcome::Denied | ProbeOutcome::Failed(_) => AuthState::Unauthenticated,
        }
    }

    fn log(&self) {
        match self {
            ProbeOutcome::Authenticated(user) => {
                log::debug!("Session probe: authenticated as '{}'", user.username)
            }
            ProbeOutcome::Denied => log::info!("Session probe: no valid session"),
            ProbeOutcome::Failed(e) => log::warn!("Session probe failed, treating as logged out: {}", e),
        }
    }
}

/// Source of session probes. The browser build uses [`HttpSessionProbe`].
pub trait SessionProbe {
    fn probe(&self) -> impl Future<Output = ProbeOutcome>;
}

/// Probes `GET /api/auth/user/` with the session cookie
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSessionProbe;

impl SessionProbe for HttpSessionProbe {
    async fn probe(&self) -> ProbeOutcome {
        ProbeOutcome::from_result(api::get_current_user().await)
    }
}

/// Issue one probe and collapse it to an [`AuthState`]. Never fails.
///
/// Used where only the yes/no answer matters, such as the login page
/// skipping itself for a signed-in visitor. Guarded views keep the full
/// [`ProbeOutcome`] through [`probe_for_mount`] so they can expose the user.
pub async fn check_session<P: SessionProbe>(probe: &P) -> AuthState {
    let outcome = probe.probe().await;
    outcome.log();
    outcome.auth_state()
}

/// Whether `mount` is still alive and the probe found a live session
pub async fn signed_in_for_mount<P: SessionProbe>(probe: &P, mount: &MountToken) -> bool {
    check_session(probe).await == AuthState::Authenticated && mount.is_active()
}

/// What a guarded view should render right now
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderDecision {
    /// Still checking: render nothing at all
    Nothing,
    /// Go to the login page, replacing the current history entry
    RedirectToLogin,
    /// Render the protected children as-is
    Children,
}

/// Per-mount session state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionGuard {
    state: AuthState,
    user: Option<UserInfo>,
    probe_started: bool,
}

impl SessionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// User returned by the probe, once authenticated
    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    /// Claim the mount's single probe. Returns `false` if it was already
    /// claimed.
    pub fn begin_probe(&mut self) -> bool {
        if self.probe_started {
            return false;
        }
        self.probe_started = true;
        true
    }

    /// Apply the probe outcome. Only the first resolution of a mount counts;
    /// returns whether the state changed.
    pub fn resolve(&mut self, outcome: ProbeOutcome) -> bool {
        if self.state != AuthState::Unknown {
            log::debug!("Ignoring extra session probe result; state is {:?}", self.state);
            return false;
        }
        outcome.log();
        self.state = outcome.auth_state();
        if let ProbeOutcome::Authenticated(user) = outcome {
            self.user = Some(user);
        }
        true
    }

    pub fn render(&self) -> RenderDecision {
        match self.state {
            AuthState::Unknown => RenderDecision::Nothing,
            AuthState::Unauthenticated => RenderDecision::RedirectToLogin,
            AuthState::Authenticated => RenderDecision::Children,
        }
    }
}

/// Liveness flag of one guarded mount. Cancelled on unmount.
#[derive(Clone, Debug)]
pub struct MountToken(Arc<AtomicBool>);

impl MountToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn cancel(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the probe for `mount`. `None` if the mount went away while waiting.
pub async fn probe_for_mount<P: SessionProbe>(probe: &P, mount: &MountToken) -> Option<ProbeOutcome> {
    let outcome = probe.probe().await;
    if !mount.is_active() {
        log::debug!("Guarded view unmounted before the session probe resolved; discarding result");
        return None;
    }
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn user() -> UserInfo {
        UserInfo {
            id: 1,
            username: "admin".into(),
            email: String::new(),
            is_staff: true,
        }
    }

    /// Answers with a fixed outcome and counts calls
    struct ScriptedProbe {
        outcome: ProbeOutcome,
        calls: Cell<u32>,
        /// Cancelled while the probe is "in flight"
        unmount_during_probe: RefCell<Option<MountToken>>,
    }

    impl ScriptedProbe {
        fn new(outcome: ProbeOutcome) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
                unmount_during_probe: RefCell::new(None),
            }
        }
    }

    impl SessionProbe for ScriptedProbe {
        async fn probe(&self) -> ProbeOutcome {
            self.calls.set(self.calls.get() + 1);
            if let Some(mount) = self.unmount_during_probe.borrow().as_ref() {
                mount.cancel();
            }
            self.outcome.clone()
        }
    }

    /// Drives one mount the way the guard component does
    fn mount_once(probe: &ScriptedProbe, mount: &MountToken) -> SessionGuard {
        let mut guard = SessionGuard::new();
        assert_eq!(guard.render(), RenderDecision::Nothing);
        if guard.begin_probe() {
            if let Some(outcome) = block_on(probe_for_mount(probe, mount)) {
                guard.resolve(outcome);
            }
        }
        assert!(!guard.begin_probe());
        guard
    }

    #[test]
    fn test_new_guard_is_unknown_and_renders_nothing() {
        let guard = SessionGuard::new();
        assert_eq!(guard.state(), AuthState::Unknown);
        assert_eq!(guard.render(), RenderDecision::Nothing);
        assert!(guard.user().is_none());
    }

    #[test]
    fn test_authenticated_probe_renders_children() {
        let probe = ScriptedProbe::new(ProbeOutcome::Authenticated(user()));
        let guard = mount_once(&probe, &MountToken::new());
        assert_eq!(guard.state(), AuthState::Authenticated);
        assert_eq!(guard.render(), RenderDecision::Children);
        assert_eq!(guard.user().map(|u| u.username.as_str()), Some("admin"));
        assert_eq!(probe.calls.get(), 1);
    }

    #[test]
    fn test_denied_and_failed_both_redirect() {
        for outcome in [
            ProbeOutcome::Denied,
            ProbeOutcome::Failed(ApiError::Network("offline".into())),
            ProbeOutcome::Failed(ApiError::Parse("expected value".into())),
        ] {
            let probe = ScriptedProbe::new(outcome);
            let guard = mount_once(&probe, &MountToken::new());
            assert_eq!(guard.state(), AuthState::Unauthenticated);
            assert_eq!(guard.render(), RenderDecision::RedirectToLogin);
            assert!(guard.user().is_none());
        }
    }

    #[test]
    fn test_exactly_one_probe_per_mount() {
        let probe = ScriptedProbe::new(ProbeOutcome::Authenticated(user()));
        for _ in 0..3 {
            mount_once(&probe, &MountToken::new());
        }
        assert_eq!(probe.calls.get(), 3);
    }

    #[test]
    fn test_state_is_terminal_for_the_mount() {
        let mut guard = SessionGuard::new();
        assert!(guard.resolve(ProbeOutcome::Denied));
        assert!(!guard.resolve(ProbeOutcome::Authenticated(user())));
        assert_eq!(guard.state(), AuthState::Unauthenticated);
        assert!(guard.user().is_none());
    }

    #[test]
    fn test_result_after_unmount_is_discarded() {
        let probe = ScriptedProbe::new(ProbeOutcome::Authenticated(user()));
        let mount = MountToken::new();
        *probe.unmount_during_probe.borrow_mut() = Some(mount.clone());

        let guard = mount_once(&probe, &mount);
        assert_eq!(probe.calls.get(), 1);
        assert_eq!(guard.state(), AuthState::Unknown);
        assert_eq!(guard.render(), RenderDecision::Nothing);
    }

    #[test]
    fn test_stale_mount_does_not_leak_into_new_mount() {
        let stale = MountToken::new();
        stale.cancel();
        let probe = ScriptedProbe::new(ProbeOutcome::Authenticated(user()));
        assert!(block_on(probe_for_mount(&probe, &stale)).is_none());

        // the next mount starts from scratch
        let fresh = mount_once(&ScriptedProbe::new(ProbeOutcome::Denied), &MountToken::new());
        assert_eq!(fresh.state(), AuthState::Unauthenticated);
    }

    #[test]
    fn test_check_session_collapses_outcomes() {
        let ok = ScriptedProbe::new(ProbeOutcome::Authenticated(user()));
        let denied = ScriptedProbe::new(ProbeOutcome::Denied);
        let failed = ScriptedProbe::new(ProbeOutcome::Failed(ApiError::Status {
            status: 500,
            message: "boom".into(),
        }));
        assert_eq!(block_on(check_session(&ok)), AuthState::Authenticated);
        assert_eq!(block_on(check_session(&denied)), AuthState::Unauthenticated);
        assert_eq!(block_on(check_session(&failed)), AuthState::Unauthenticated);
    }

    #[test]
    fn test_signed_in_for_mount() {
        let ok = ScriptedProbe::new(ProbeOutcome::Authenticated(user()));
        assert!(block_on(signed_in_for_mount(&ok, &MountToken::new())));

        let failed = ScriptedProbe::new(ProbeOutcome::Failed(ApiError::Network("offline".into())));
        assert!(!block_on(signed_in_for_mount(&failed, &MountToken::new())));

        let left = ScriptedProbe::new(ProbeOutcome::Authenticated(user()));
        let mount = MountToken::new();
        *left.unmount_during_probe.borrow_mut() = Some(mount.clone());
        assert!(!block_on(signed_in_for_mount(&left, &mount)));
        assert_eq!(left.calls.get(), 1);
    }

    #[test]
    fn test_outcome_from_api_result() {
        let denied = ApiError::Status {
            status: 403,
            message: String::new(),
        };
        assert_eq!(ProbeOutcome::from_result(Err(denied)), ProbeOutcome::Denied);
        assert!(matches!(
            ProbeOutcome::from_result(Err(ApiError::Network("x".into()))),
            ProbeOutcome::Failed(_)
        ));
        assert_eq!(
            ProbeOutcome::from_result(Ok(user())),
            ProbeOutcome::Authenticated(user())
        );
    }
}
