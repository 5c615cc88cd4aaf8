use crate::global::ConsoleHome;
use crate::services::{ApiClient, ApiError, AuthContext, ErrorCategory, LoginRedirect, Session};
use crate::Config;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;

/// Everything a command needs: configuration, the stored session, the API
/// client and the auth context built on it.
pub struct Console {
    pub home: ConsoleHome,
    pub config: Config,
    pub auth: AuthContext,
    redirect: Arc<LoginRedirect>,
}

impl Console {
    pub fn open(home: Option<&Path>, api_url: Option<&str>) -> Result<Self> {
        let home = match home {
            Some(path) => ConsoleHome::at(path)?,
            None => ConsoleHome::init()?,
        };
        let mut config = Config::load(&home.config_path)?;
        if let Some(url) = api_url {
            config.api.base_url = url.to_string();
            config.validate()?;
        }

        let session = Session::open(&home.session_path);
        let redirect = Arc::new(LoginRedirect::new());
        let api = ApiClient::from_config(&config, session, redirect.clone())
            .context("Failed to build API client")?;

        Ok(Self {
            home,
            config,
            auth: AuthContext::new(api),
            redirect,
        })
    }

    pub fn api(&self) -> &ApiClient {
        self.auth.api()
    }

    /// Revalidate the stored session and refuse to continue without one.
    pub async fn require_login(&mut self) -> Result<()> {
        self.auth.initialize().await;
        if !self.auth.is_authenticated() {
            anyhow::bail!("Not signed in. Run `showcase login` first.");
        }
        Ok(())
    }

    /// Print the login hint if the server revoked the session during the
    /// command.
    pub fn finish(&self) {
        if self.redirect.take() {
            eprintln!("Session expired. Run `showcase login` to sign in again.");
        }
    }
}

/// Turn an API error from a save into the command's failure. Featured
/// conflicts are shown as a warning instead of a plain error.
pub fn report(error: ApiError) -> anyhow::Error {
    match error.category() {
        ErrorCategory::Conflict => {
            eprintln!("warning: {}", error);
            anyhow::anyhow!("Changes were not saved")
        }
        ErrorCategory::Authorization | ErrorCategory::Form => anyhow::Error::new(error),
    }
}

/// Ask a yes/no question on stdin. Anything but "y"/"yes" is a no.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
