use crate::models::LoginCredentials;
use crate::services::AuthContext;

pub const DEFAULT_LOGIN_ERROR: &str = "Incorrect username or password. Please try again.";

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Field-level problems, in form order.
    pub fn validate(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if self.username.trim().is_empty() {
            errors.push("Username is required");
        }
        if self.password.is_empty() {
            errors.push("Password is required");
        }
        errors
    }

    /// Validate and sign in. On failure `error` holds what to show above the
    /// form and `false` is returned.
    pub async fn submit(&mut self, auth: &mut AuthContext) -> bool {
        self.error = None;
        if let Some(first) = self.validate().first() {
            self.error = Some((*first).to_string());
            return false;
        }

        self.submitting = true;
        let credentials = LoginCredentials::new(self.username.trim(), self.password.clone());
        let result = auth.login(&credentials).await;
        self.submitting = false;

        match result {
            Ok(()) => true,
            Err(e) => {
                self.error = Some(
                    e.server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| DEFAULT_LOGIN_ERROR.to_string()),
                );
                false
            }
        }
    }
}
