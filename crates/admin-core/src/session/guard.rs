//! Session Guard
//!
//! `Unknown -> {Authenticated, Redirecting}`. `Authenticated` is terminal
//! until logout; the login view resets the guard to `Unknown`.

use tracing::{debug, info};

use super::Session;
use crate::api::AdminApi;
use crate::domain::{ApiResult, Credentials, Profile};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum GuardState {
    #[default]
    Unknown,
    Authenticated(Profile),
    Redirecting,
}

impl GuardState {
    pub fn needs_check(&self) -> bool {
        matches!(self, GuardState::Unknown)
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            GuardState::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    /// Apply a verdict from `authorize`; only `Unknown` moves
    pub fn settle(self, verdict: GuardState) -> GuardState {
        match self {
            GuardState::Unknown => verdict,
            settled => settled,
        }
    }

    /// Drop the credential and head for the login view
    pub fn logout(self, session: &Session) -> GuardState {
        session.sign_out();
        info!("Signed out");
        GuardState::Redirecting
    }

    /// Back to `Unknown`, once the login view is showing
    pub fn reset(self) -> GuardState {
        GuardState::Unknown
    }
}

/// Confirm the stored credential belongs to a privileged user.
///
/// Any failure, and any role other than `admin_role`, is a redirect.
pub async fn authorize<A: AdminApi + ?Sized>(
    session: &Session,
    api: &A,
    admin_role: &str,
) -> GuardState {
    if !session.is_signed_in() {
        debug!("No stored token, redirecting to login");
        return GuardState::Redirecting;
    }
    match api.profile().await {
        Ok(profile) if profile.role == admin_role => {
            debug!(username = %profile.username, "Session confirmed");
            GuardState::Authenticated(profile)
        }
        Ok(profile) => {
            debug!(role = %profile.role, "Role not allowed, redirecting to login");
            GuardState::Redirecting
        }
        Err(e) => {
            debug!("Profile check failed: {}", e);
            GuardState::Redirecting
        }
    }
}

/// Exchange credentials for a token and store it
pub async fn sign_in<A: AdminApi + ?Sized>(
    session: &Session,
    api: &A,
    credentials: &Credentials,
) -> ApiResult<()> {
    let grant = api.login(credentials).await?;
    session.sign_in(&grant.token);
    info!(username = %credentials.username, "Signed in");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApiError;
    use crate::testing::{Call, RecordingApi};

    fn profile(role: &str) -> Profile {
        Profile {
            username: "alice".to_string(),
            role: role.to_string(),
        }
    }

    #[tokio::test]
    async fn test_no_token_redirects_without_calling_api() {
        let api = RecordingApi::default();
        let verdict = authorize(&Session::in_memory(), &api, "Admin").await;
        assert_eq!(verdict, GuardState::Redirecting);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_admin_profile_authenticates() {
        let session = Session::in_memory();
        session.sign_in("tok");
        let api = RecordingApi::default();
        api.set_profile(Ok(profile("Admin")));

        let verdict = authorize(&session, &api, "Admin").await;
        assert_eq!(verdict, GuardState::Authenticated(profile("Admin")));
        assert_eq!(api.calls(), vec![Call::Profile]);
    }

    #[tokio::test]
    async fn test_other_role_redirects() {
        let session = Session::in_memory();
        session.sign_in("tok");
        let api = RecordingApi::default();
        api.set_profile(Ok(profile("User")));

        assert_eq!(authorize(&session, &api, "Admin").await, GuardState::Redirecting);
    }

    #[tokio::test]
    async fn test_rejected_token_redirects() {
        let session = Session::in_memory();
        session.sign_in("expired");
        let api = RecordingApi::default();
        api.set_profile(Err(ApiError::Unauthorized));

        assert_eq!(authorize(&session, &api, "Admin").await, GuardState::Redirecting);
    }

    #[test]
    fn test_authenticated_is_terminal_until_logout() {
        let session = Session::in_memory();
        session.sign_in("tok");

        let state = GuardState::Unknown.settle(GuardState::Authenticated(profile("Admin")));
        let state = state.settle(GuardState::Redirecting);
        assert!(state.profile().is_some());

        let state = state.logout(&session);
        assert_eq!(state, GuardState::Redirecting);
        assert!(!session.is_signed_in());
        assert!(state.reset().needs_check());
    }

    #[tokio::test]
    async fn test_sign_in_stores_token() {
        let session = Session::in_memory();
        let api = RecordingApi::default();
        let credentials = Credentials {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };

        sign_in(&session, &api, &credentials).await.unwrap();
        assert_eq!(session.token().as_deref(), Some("token-for-alice"));
    }
}
