use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const TOKEN_ENV_KEY: &str = "GHPROFILE_GITHUB_TOKEN";

/// Stored credentials: a single access token obtained from the device flow,
/// kept in a small JSON file under the platform config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
}

impl Credentials {
    /// Resolution order: environment variable, then the credential file.
    /// Returns `Ok(None)` when neither exists; that triggers interactive
    /// authorization at startup.
    pub fn load(path: Option<&Path>) -> Result<Option<Self>> {
        if let Ok(token) = std::env::var(TOKEN_ENV_KEY)
            && !token.is_empty()
        {
            return Ok(Some(Credentials {
                access_token: token,
            }));
        }

        let path = match path {
            Some(p) => p.to_path_buf(),
            None => default_path()?,
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read credential file: {}", path.display()))?;
        let creds: Credentials = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse credential file: {}", path.display()))?;
        Ok(Some(creds))
    }

    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => default_path()?,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = serde_json::to_string(self).context("Failed to serialize credentials")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write credential file: {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
        }

        Ok(())
    }
}

fn default_path() -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from("", "", "ghprofile").context("Could not resolve home directory")?;
    Ok(proj_dirs.config_dir().join("config.json"))
}

pub fn log_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "ghprofile") {
        return proj_dirs.data_dir().join("logs");
    }
    PathBuf::from(".local/share/ghprofile/logs")
}
