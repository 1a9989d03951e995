//! Guest-login gate in front of the browsing screens.

use crate::storage::Storage;

/// Storage key holding the serialized logged-in flag.
const LOGIN_KEY: &str = "isLoggedIn";

/// Session gate tracking whether the user has logged in.
///
/// There are no credentials and no logout: "guest" login always succeeds.
/// The flag flip is synchronous; recording it durably is best-effort and a
/// failed write is logged, never surfaced.
#[derive(Debug)]
pub struct AuthGate<S> {
    storage: S,
    logged_in: bool,
}

impl<S: Storage> AuthGate<S> {
    /// Gate that starts logged out.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            logged_in: false,
        }
    }

    /// Gate seeded from a previously persisted login flag.
    ///
    /// Nothing stored (first run) or a failed read both mean logged out.
    pub async fn restore(storage: S) -> Self {
        let logged_in = match storage.get(LOGIN_KEY).await {
            Ok(flag) => flag.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored login flag");
                false
            }
        };
        Self { storage, logged_in }
    }

    /// Whether the user has logged in this session.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Log in as a guest.
    ///
    /// The flag is flipped before the durable write is attempted, so login
    /// succeeds whether or not persistence does.
    pub async fn guest_login(&mut self) {
        self.logged_in = true;
        if let Err(e) = self.storage.set(LOGIN_KEY, "true").await {
            tracing::warn!(error = %e, "failed to persist login flag");
        }
    }
}
