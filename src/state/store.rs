//! Session store: single writer of the authentication state.
//!
//! ARCHITECTURE
//! ============
//! The store mediates between the persisted cache, the credential service,
//! and UI observers. It is a cheap clonable handle; every clone shares the
//! same state and observer list.
//!
//! Mutations happen only in `bootstrap`, `login`, `register`, and `logout`.
//! Each mutation publishes the new snapshot to every observer synchronously,
//! after the state lock is released, so observers may read the store or
//! (un)subscribe from inside a callback.
//!
//! TRADE-OFFS
//! ==========
//! Sign-in attempts are serialized: a login or registration started while
//! another is awaiting the network is rejected instead of racing it.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::net::credentials::CredentialService;
use crate::net::error::CredentialError;
use crate::net::types::{AuthGrant, RegistrationRequest, UserRecord};
use crate::util::storage::{SessionCache, TOKEN_KEY, USER_KEY};

use super::session::{LoginOutcome, SessionSnapshot};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
pub const SIGN_IN_IN_PROGRESS_MESSAGE: &str = "A sign-in is already in progress.";

type Observer = Arc<dyn Fn(&SessionSnapshot) + Send + Sync>;

struct StoreInner {
    credentials: Arc<dyn CredentialService>,
    cache: Arc<dyn SessionCache>,
    session: Mutex<SessionSnapshot>,
    observers: Mutex<Vec<(u64, Observer)>>,
    next_observer_id: AtomicU64,
    sign_in_pending: AtomicBool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared handle to the authentication state and its lifecycle operations.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

impl SessionStore {
    /// Create a store in the initial `loading` state. Call [`bootstrap`](Self::bootstrap) once at startup.
    pub fn new(credentials: Arc<dyn CredentialService>, cache: Arc<dyn SessionCache>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                credentials,
                cache,
                session: Mutex::new(SessionSnapshot::default()),
                observers: Mutex::new(Vec::new()),
                next_observer_id: AtomicU64::new(0),
                sign_in_pending: AtomicBool::new(false),
            }),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        lock(&self.inner.session).clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.inner.session).loading
    }

    pub fn is_authenticated(&self) -> bool {
        lock(&self.inner.session).is_authenticated()
    }

    /// Register `observer` to receive every snapshot published after a mutation.
    ///
    /// The observer stays registered until the returned handle is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&SessionSnapshot) + Send + Sync + 'static,
    {
        let id = self.inner.next_observer_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.inner.observers).push((id, Arc::new(observer)));
        Subscription { store: Arc::downgrade(&self.inner), id }
    }

    pub fn observer_count(&self) -> usize {
        lock(&self.inner.observers).len()
    }

    /// Restore a session from the persisted cache and leave the loading state.
    ///
    /// Missing or malformed entries are treated as logged-out and cleared.
    /// Runs at most once; later calls are ignored.
    pub fn bootstrap(&self) {
        let published = {
            let mut session = lock(&self.inner.session);
            if !session.loading {
                log::warn!("session bootstrap called twice; ignoring");
                return;
            }
            match self.read_cached_session() {
                Some((token, user)) => {
                    log::debug!("session restored for user id={}", user.id);
                    session.sign_in(token, user);
                }
                None => self.clear_cache(),
            }
            session.loading = false;
            session.clone()
        };
        self.publish(&published);
    }

    /// Sign in with username and password.
    ///
    /// On failure the session and cache are left exactly as they were.
    pub async fn login(&self, username: &str, password: &str) -> LoginOutcome {
        let Some(_pending) = SignInPending::acquire(&self.inner.sign_in_pending) else {
            return LoginOutcome::Failure { error: SIGN_IN_IN_PROGRESS_MESSAGE.to_owned() };
        };
        let result = self.inner.credentials.authenticate(username, password).await;
        self.finish_sign_in(result, LOGIN_FAILED_MESSAGE)
    }

    /// Create an account and sign it in. Same contract as [`login`](Self::login).
    pub async fn register(&self, request: &RegistrationRequest) -> LoginOutcome {
        let Some(_pending) = SignInPending::acquire(&self.inner.sign_in_pending) else {
            return LoginOutcome::Failure { error: SIGN_IN_IN_PROGRESS_MESSAGE.to_owned() };
        };
        let result = self.inner.credentials.register(request).await;
        self.finish_sign_in(result, REGISTER_FAILED_MESSAGE)
    }

    /// Sign out. Revocation is best-effort; local state is always cleared.
    pub async fn logout(&self) {
        let token = lock(&self.inner.session).token.clone();
        if let Some(token) = token {
            if let Err(e) = self.inner.credentials.revoke(&token).await {
                log::warn!("token revoke failed, clearing local session anyway: {e}");
            }
        }
        self.clear_cache();
        let published = {
            let mut session = lock(&self.inner.session);
            session.sign_out();
            session.clone()
        };
        log::info!("signed out");
        self.publish(&published);
    }

    fn finish_sign_in(&self, result: Result<AuthGrant, CredentialError>, fallback: &str) -> LoginOutcome {
        let grant = match result {
            Ok(grant) => grant,
            Err(e) => {
                log::info!("sign-in failed: {e}");
                let error = e.user_message().unwrap_or(fallback).to_owned();
                return LoginOutcome::Failure { error };
            }
        };
        let user_json = match serde_json::to_string(&grant.user) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("could not serialize user record: {e}");
                return LoginOutcome::Failure { error: fallback.to_owned() };
            }
        };
        self.inner.cache.set(TOKEN_KEY, &grant.token);
        self.inner.cache.set(USER_KEY, &user_json);
        let user_id = grant.user.id;
        let published = {
            let mut session = lock(&self.inner.session);
            session.sign_in(grant.token, grant.user);
            session.clone()
        };
        log::info!("signed in as user id={user_id}");
        self.publish(&published);
        LoginOutcome::Success
    }

    fn read_cached_session(&self) -> Option<(String, UserRecord)> {
        let token = self.inner.cache.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let raw_user = self.inner.cache.get(USER_KEY)?;
        match serde_json::from_str::<UserRecord>(&raw_user) {
            Ok(user) => Some((token, user)),
            Err(e) => {
                log::warn!("discarding corrupt cached user record: {e}");
                None
            }
        }
    }

    fn clear_cache(&self) {
        self.inner.cache.remove(TOKEN_KEY);
        self.inner.cache.remove(USER_KEY);
    }

    fn publish(&self, snapshot: &SessionSnapshot) {
        let observers: Vec<Observer> = lock(&self.inner.observers)
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer(snapshot);
        }
    }
}

/// Observer registration handle; unsubscribes on drop.
pub struct Subscription {
    store: Weak<StoreInner>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            lock(&inner.observers).retain(|(id, _)| *id != self.id);
        }
    }
}

/// Holds the sign-in slot for the duration of one attempt.
struct SignInPending<'a>(&'a AtomicBool);

impl<'a> SignInPending<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SignInPending<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
