use crate::models::{LoginCredentials, User};
use crate::services::api::{ApiClient, ApiResult};
use crate::services::session::Session;

/// Signed-in state shared with every view: the current user, whether startup
/// revalidation is still running, and the login/logout operations.
#[derive(Debug)]
pub struct AuthContext {
    api: ApiClient,
    user: Option<User>,
    loading: bool,
}

impl AuthContext {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            user: None,
            loading: true,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Revalidate a stored session against `/auth/me`. Only runs when both a
    /// token and a saved user are present; any failure discards the stored
    /// session and leaves the context signed out.
    pub async fn initialize(&mut self) {
        let session = self.api.session().clone();
        if session.token().is_some() && session.has_saved_user() {
            match self.api.current_user().await {
                Ok(user) => {
                    tracing::debug!("Restored session for '{}'", user.username);
                    self.user = Some(user);
                }
                Err(e) => {
                    tracing::error!("Failed to get current user: {}", e);
                    if let Err(e) = session.clear() {
                        tracing::warn!("Failed to clear stored session: {}", e);
                    }
                }
            }
        }
        self.loading = false;
    }

    pub async fn login(&mut self, credentials: &LoginCredentials) -> ApiResult<()> {
        let response = match self.api.login(credentials).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Login failed: {}", e);
                return Err(e);
            }
        };

        self.api.session().store(&response)?;
        tracing::info!("Signed in as '{}'", response.user.username);
        self.user = Some(response.user);
        Ok(())
    }

    /// Sign out. A failing backend call is logged and otherwise ignored; the
    /// local session is cleared regardless.
    pub async fn logout(&mut self) {
        if let Err(e) = self.api.logout().await {
            tracing::warn!("Logout error: {}", e);
        }

        self.user = None;
        if let Err(e) = self.api.session().clear() {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
    }
}
