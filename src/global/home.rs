use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Per-user directory holding the console's config and stored session.
#[derive(Debug, Clone)]
pub struct ConsoleHome {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub session_path: PathBuf,
}

impl ConsoleHome {
    pub fn get_home_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".showcase"))
    }

    /// Open the default home, `~/.showcase`.
    pub fn init() -> Result<Self> {
        Self::at(&Self::get_home_dir()?)
    }

    pub fn at(root: &Path) -> Result<Self> {
        if !root.exists() {
            std::fs::create_dir_all(root)
                .with_context(|| format!("Failed to create console home at {}", root.display()))?;
            tracing::info!("Created console home directory: {}", root.display());
        }

        Ok(Self {
            root: root.to_path_buf(),
            config_path: root.join("config.toml"),
            session_path: root.join("session.toml"),
        })
    }
}
