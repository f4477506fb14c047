//! Session state and its single owning controller.
//!
//! DESIGN
//! ======
//! `SessionState` is a closed state machine: `Unauthenticated`, `Loading`,
//! or `Authenticated` with the full identity triple. Holding the triple
//! inside the `Authenticated` variant makes the core invariant structural:
//! there is no way to have a role without a user, a user without a
//! credential, or an "authenticated" flag out of step with either.
//!
//! All mutation funnels through the one [`Session`] controller created at
//! the app root; everything else only reads. On a single-threaded event
//! loop that single-writer rule is all the synchronization the session
//! needs. Async completions (sign-in, startup revalidation) re-check that
//! the session is still `Loading` before applying their result, so a
//! sign-out that lands mid-flight deterministically wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError, AuthGrant};
use crate::net::types::{Role, User};
use crate::util::config::{SESSION_TIMEOUT_MS, TOKEN_STORAGE_KEY};
use crate::util::credential;
use crate::util::session_timer::SessionTimer;
use crate::util::token::{self, StoredCredential};

/// The signed-in identity triple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub user: User,
    pub role: Role,
    pub token: String,
}

/// Who is using the app right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No session: signed out, or a sign-in attempt failed.
    Unauthenticated,
    /// A sign-in or startup revalidation is in flight; render neutral UI
    /// and make no navigation decisions.
    Loading,
    /// Signed in.
    Authenticated(Account),
}

impl Default for SessionState {
    /// Sessions start in `Loading` until the startup credential check
    /// completes, so protected views wait instead of flashing a redirect.
    fn default() -> Self {
        Self::Loading
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(account) => Some(&account.user),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Authenticated(account) => Some(account.role),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated(account) => Some(&account.token),
            _ => None,
        }
    }
}

/// What a `storage` event from another tab means for this one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CrossTabAction {
    Ignore,
    /// Another tab cleared the credential: sign this tab out locally.
    SignOut,
    /// Another tab wrote a credential while this tab is signed out:
    /// revalidate and adopt it.
    Adopt,
}

pub(crate) fn cross_tab_action(
    changed_key: Option<&str>,
    has_value: bool,
    authenticated: bool,
) -> CrossTabAction {
    if changed_key != Some(TOKEN_STORAGE_KEY) {
        return CrossTabAction::Ignore;
    }
    match (has_value, authenticated) {
        (false, true) => CrossTabAction::SignOut,
        (true, false) => CrossTabAction::Adopt,
        _ => CrossTabAction::Ignore,
    }
}

/// Owning handle for the app-wide session.
///
/// Cheap to copy; provided via context at the app root. Reads go through
/// [`Session::watch`]/[`Session::current`]; every mutation is one of the
/// methods below.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
    timer: StoredValue<SessionTimer, LocalStorage>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            timer: StoredValue::new_local(SessionTimer::new(SESSION_TIMEOUT_MS)),
        }
    }

    /// Create the session handle and provide it to the component tree.
    pub fn provide() -> Self {
        let session = Self::new();
        provide_context(session);
        session
    }

    /// The session handle provided at the app root.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Subscribe to session changes.
    pub fn watch(self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current state, tracked.
    pub fn current(self) -> SessionState {
        self.state.get()
    }

    /// Current credential without subscribing, for request headers.
    pub fn token_snapshot(self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(ToOwned::to_owned))
    }

    /// Sign in. On success the credential is persisted, the idle timer is
    /// armed, and the signed-in role is returned for redirecting.
    ///
    /// # Errors
    ///
    /// The normalized gateway error; the session is left `Unauthenticated`.
    /// If a sign-out raced this call, the result is discarded and
    /// [`ApiError::Interrupted`] is returned.
    pub async fn login(self, email: &str, password: &str) -> Result<Role, ApiError> {
        self.state.set(SessionState::Loading);
        match api::login(email, password).await {
            Ok(grant) => {
                if !self.state.with_untracked(SessionState::is_loading) {
                    credential::clear_token();
                    return Err(ApiError::Interrupted);
                }
                let role = grant.role;
                self.install(grant);
                Ok(role)
            }
            Err(err) => {
                if self.state.with_untracked(SessionState::is_loading) {
                    self.state.set(SessionState::Unauthenticated);
                }
                Err(err)
            }
        }
    }

    /// Resolve the session from storage at startup.
    ///
    /// A missing credential resolves straight to `Unauthenticated`. An
    /// unusable one (malformed, expired, roleless) is cleared without any
    /// network traffic. A usable one is revalidated against the identity
    /// service, because client-side decoding cannot see revocation; any
    /// revalidation failure clears the stored credential.
    pub async fn initialize(self) {
        let stored = credential::load_token();
        match token::evaluate_stored(stored.as_deref(), token::now_epoch_secs()) {
            StoredCredential::Missing => self.state.set(SessionState::Unauthenticated),
            StoredCredential::Invalid => {
                credential::clear_token();
                self.state.set(SessionState::Unauthenticated);
            }
            StoredCredential::Usable(_) => {
                self.state.set(SessionState::Loading);
                let raw = stored.unwrap_or_default();
                match api::fetch_current_user(&raw).await {
                    Ok(grant) if self.state.with_untracked(SessionState::is_loading) => {
                        self.install(grant);
                    }
                    Ok(_) => {
                        // Superseded by a sign-out while revalidating.
                        credential::clear_token();
                    }
                    Err(_) => self.reset(),
                }
            }
        }
    }

    /// Sign out. Local cleanup is unconditional and immediate; the
    /// identity service is notified best-effort afterwards. Safe to call
    /// repeatedly and while already signed out.
    pub fn logout(self) {
        let token = self.token_snapshot();
        self.reset();
        #[cfg(feature = "hydrate")]
        if let Some(token) = token {
            leptos::task::spawn_local(async move {
                api::logout(&token).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    }

    /// Idle-timer expiry. Idempotent against an explicit sign-out racing
    /// the timer callback.
    pub fn expire(self) {
        if self.state.with_untracked(SessionState::is_authenticated) {
            leptos::logging::warn!("session timed out; signing out");
            self.reset();
        }
    }

    /// Re-arm the idle timer on user activity. No-op when signed out.
    pub fn extend(self) {
        if self.state.with_untracked(SessionState::is_authenticated) {
            self.arm_timer();
        }
    }

    /// Swap the current credential for a fresh one and restart the idle
    /// timer. No-op when signed out.
    ///
    /// # Errors
    ///
    /// The normalized gateway error. A 401 invalidates the session; other
    /// failures leave the current session untouched.
    pub async fn refresh(self) -> Result<(), ApiError> {
        let Some(current) = self.token_snapshot() else {
            return Ok(());
        };
        match api::refresh(&current).await {
            Ok(grant) => {
                if self.state.with_untracked(SessionState::is_authenticated) {
                    self.install(grant);
                }
                Ok(())
            }
            Err(err) => {
                self.observe_api_error(&err);
                Err(err)
            }
        }
    }

    /// Reactive invalidation: any authenticated call that comes back 401
    /// ends the session, clearing the stored credential with it.
    pub fn observe_api_error(self, err: &ApiError) {
        if err.is_unauthorized() && self.state.with_untracked(SessionState::is_authenticated) {
            leptos::logging::warn!("credential rejected by service; signing out");
            self.reset();
        }
    }

    /// Apply a `storage` event from another tab of the same origin.
    pub fn sync_external_credential(self, changed_key: Option<&str>, new_value: Option<&str>) {
        let authenticated = self.state.with_untracked(SessionState::is_authenticated);
        match cross_tab_action(changed_key, new_value.is_some(), authenticated) {
            CrossTabAction::Ignore => {}
            CrossTabAction::SignOut => self.reset(),
            CrossTabAction::Adopt => {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(self.initialize());
            }
        }
    }

    fn install(&self, grant: AuthGrant) {
        credential::save_token(&grant.token);
        self.state.set(SessionState::Authenticated(Account {
            user: grant.user,
            role: grant.role,
            token: grant.token,
        }));
        self.arm_timer();
    }

    fn reset(&self) {
        credential::clear_token();
        self.timer.update_value(SessionTimer::disarm);
        self.state.set(SessionState::Unauthenticated);
    }

    fn arm_timer(&self) {
        let session = *self;
        self.timer.update_value(|timer| timer.arm(move || session.expire()));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
