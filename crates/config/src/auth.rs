//! GitHub token discovery.
//!
//! This module resolves the token used for GitHub API calls, with the
//! following fallback chain:
//!
//! 1. `GH_TOKEN` environment variable
//! 2. `GITHUB_TOKEN` environment variable
//! 3. `gh auth token` command (GitHub CLI)
//! 4. Unauthenticated (returns `None`)

use crate::error::{ConfigError, Result};

/// Resolves the GitHub token for API access.
///
/// Tries `GH_TOKEN`, then `GITHUB_TOKEN`, then the `gh` CLI. A missing
/// token is not an error; unauthenticated access works against public
/// repositories, just with lower rate limits.
///
/// # Examples
///
/// ```no_run
/// use twig_config::auth::resolve_token;
///
/// # async fn example() {
/// match resolve_token().await {
///     Some(_token) => println!("authenticated access"),
///     None => println!("unauthenticated access"),
/// }
/// # }
/// ```
pub async fn resolve_token() -> Option<String> {
    // 1. + 2. Environment, in the GitHub CLI's precedence order
    for var in ["GH_TOKEN", "GITHUB_TOKEN"] {
        if let Ok(token) = std::env::var(var)
            && !token.is_empty()
        {
            return Some(token);
        }
    }

    // 3. Try gh CLI
    get_gh_token().await.ok().flatten()
}

/// Gets a GitHub token from the `gh` CLI.
///
/// Runs `gh auth token` and returns the token if successful.
///
/// # Returns
///
/// - `Ok(Some(token))` if the command succeeds and returns a token
/// - `Ok(None)` if the `gh` command is not found or not logged in
///
/// # Errors
///
/// Returns an error if the `gh` command exists but fails for any other
/// reason.
///
/// # Examples
///
/// ```no_run
/// use twig_config::auth::get_gh_token;
///
/// # async fn example() -> twig_config::Result<()> {
/// match get_gh_token().await? {
///     Some(_token) => println!("Got token from gh CLI"),
///     None => println!("gh CLI not available"),
/// }
/// # Ok(())
/// # }
/// ```
pub async fn get_gh_token() -> Result<Option<String>> {
    use tokio::process::Command;

    let output = match Command::new("gh").args(["auth", "token"]).output().await {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            // gh not installed, not an error
            return Ok(None);
        }
        Err(e) => {
            return Err(ConfigError::GhAuthFailed(e));
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        // If gh is not logged in, treat as no token available
        if stderr.contains("not logged in") || stderr.contains("no oauth token") {
            return Ok(None);
        }
        return Err(ConfigError::GhAuthError {
            code: output.status.code(),
            stderr,
        });
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Ok(None);
    }

    Ok(Some(token))
}
