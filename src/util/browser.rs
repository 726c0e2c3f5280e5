use anyhow::{Context, Result};
use tracing::debug;

/// GitHub stores profile website fields without a scheme more often than
/// not; default those to https so the platform opener accepts them.
pub fn normalize_url(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Hand a URL to the platform opener. Blocks until the opener returns, so
/// callers run it off the UI task.
pub fn open_url(url: &str) -> Result<()> {
    let target = normalize_url(url);
    debug!(url = %target, "Opening in browser");
    open::that(&target).with_context(|| format!("Failed to open {}", target))
}
