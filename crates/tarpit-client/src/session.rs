//! Session identity and its durable credential.
//!
//! One `SessionService` instance is constructed at startup and handed to the
//! client and every pagination controller; nothing else may mutate identity
//! state. The service holds `{user, logged_in, token}` and persists the
//! token through a [`CredentialStore`].

use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::error::Result;
use crate::traits::CredentialStore;

/// Identity transitions the presentation layer reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A login or a first successful authenticated call confirmed the token.
    Authenticated { user: Option<String> },
    /// The backend answered 403; the operator must re-authenticate.
    AuthRequired,
    LoggedOut,
}

#[derive(Default)]
struct SessionState {
    user: Option<String>,
    logged_in: bool,
    token: Option<String>,
}

/// Holds the session identity: anonymous or authenticated, nothing else.
///
/// `logged_in` is only ever true while a token is present. A stored token
/// alone does not confer identity; it has to be confirmed by a successful
/// login or a successful authenticated call.
pub struct SessionService {
    store: Arc<dyn CredentialStore>,
    state: RwLock<SessionState>,
    events: async_channel::Sender<SessionEvent>,
    // Keeps the channel open while no subscriber is attached.
    drain: async_channel::Receiver<SessionEvent>,
}

impl SessionService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let (events, drain) = async_channel::bounded(32);
        SessionService {
            store,
            state: RwLock::new(SessionState::default()),
            events,
            drain,
        }
    }

    /// Reads the persisted credential, as at application start.
    ///
    /// A stored token populates the in-memory state but does not mark the
    /// session authenticated.
    pub async fn initialize(&self) -> Result<()> {
        let stored = self.store.load().await?;
        let mut state = self.write_state();
        match stored {
            Some(token) => {
                debug!("session initialized with a stored credential");
                state.token = Some(token);
            }
            None => {
                debug!("session initialized anonymous");
                state.token = None;
            }
        }
        state.logged_in = false;
        state.user = None;
        Ok(())
    }

    /// Persists a credential and adopts it for subsequent calls.
    pub async fn set_token(&self, token: &str) -> Result<()> {
        self.store.store(token).await?;
        self.write_state().token = Some(token.to_string());
        Ok(())
    }

    /// Adopts a validated credential and promotes the session.
    pub(crate) async fn establish(&self, user: Option<&str>, token: &str) -> Result<()> {
        self.set_token(token).await?;
        {
            let mut state = self.write_state();
            state.user = user.map(str::to_string);
            state.logged_in = true;
        }
        self.emit(SessionEvent::Authenticated {
            user: user.map(str::to_string),
        });
        Ok(())
    }

    /// Promotes the session when a token it already holds proves itself
    /// through a successful authenticated call.
    pub(crate) fn confirm_identity(&self) {
        let user = {
            let mut state = self.write_state();
            if state.logged_in || state.token.is_none() {
                return;
            }
            state.logged_in = true;
            state.user.clone()
        };
        self.emit(SessionEvent::Authenticated { user });
    }

    /// Demotes the session after an HTTP 403.
    ///
    /// The token is kept, in memory and at rest; a re-login overwrites it
    /// and a restart may retry it.
    pub fn on_unauthorized(&self) {
        self.write_state().logged_in = false;
        warn!("backend rejected the credential, session demoted");
        self.emit(SessionEvent::AuthRequired);
    }

    /// Drops the identity and the persisted credential.
    pub async fn log_out(&self) -> Result<()> {
        self.store.clear().await?;
        *self.write_state() = SessionState::default();
        self.emit(SessionEvent::LoggedOut);
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.read_state().logged_in
    }

    pub fn current_user(&self) -> Option<String> {
        self.read_state().user.clone()
    }

    pub fn current_token(&self) -> Option<String> {
        self.read_state().token.clone()
    }

    /// Identity transition feed for the presentation layer.
    pub fn subscribe(&self) -> async_channel::Receiver<SessionEvent> {
        self.drain.clone()
    }

    fn emit(&self, event: SessionEvent) {
        // Best effort; a full queue only means nobody is listening.
        let _ = self.events.try_send(event);
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
