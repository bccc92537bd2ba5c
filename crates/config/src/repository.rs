//! The [`Repository`] type and current-repository resolution.
//!
//! A [`Repository`] can be parsed from the short `"owner/repo"` form, from a
//! git remote URL, or resolved from the process environment via
//! [`Repository::current`].
//!
//! # Examples
//!
//! ```
//! use twig_config::Repository;
//!
//! let repo = Repository::parse("rust-lang/rust").unwrap();
//! assert_eq!(repo.owner(), "rust-lang");
//! assert_eq!(repo.repo(), "rust");
//!
//! let repo = Repository::from_remote_url("git@github.com:tokio-rs/tokio.git").unwrap();
//! assert_eq!(repo.full_name(), "tokio-rs/tokio");
//! ```

use crate::error::{ConfigError, Result};

/// A GitHub repository, identified by owner and name.
///
/// # Examples
///
/// ```
/// use twig_config::Repository;
///
/// let repo = Repository::new("rust-lang", "rust");
/// assert_eq!(repo.full_name(), "rust-lang/rust");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    owner: String,
    repo: String,
}

impl Repository {
    /// Creates a repository from its owner and name.
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parses a repository from the short format `"owner/repo"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain exactly one `/`, or
    /// if either side of it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use twig_config::Repository;
    ///
    /// let repo = Repository::parse("rust-lang/rust").unwrap();
    /// assert_eq!(repo.owner(), "rust-lang");
    ///
    /// assert!(Repository::parse("invalid").is_err());
    /// assert!(Repository::parse("too/many/slashes").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(ConfigError::InvalidRepository(format!(
                "expected 'owner/repo' format, got '{s}'"
            )));
        }

        let owner = parts[0].trim();
        let repo = parts[1].trim();

        if owner.is_empty() || repo.is_empty() {
            return Err(ConfigError::InvalidRepository(format!(
                "owner and repo cannot be empty in '{s}'"
            )));
        }

        Ok(Self::new(owner, repo))
    }

    /// Parses a repository from a git remote URL.
    ///
    /// Accepts the three remote forms git produces for GitHub repositories:
    ///
    /// - `https://github.com/owner/repo[.git]`
    /// - `git@github.com:owner/repo[.git]`
    /// - `ssh://git@github.com/owner/repo[.git]`
    ///
    /// The host is not validated; only the `owner/repo` path is extracted.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not contain an `owner/repo` path.
    ///
    /// # Examples
    ///
    /// ```
    /// use twig_config::Repository;
    ///
    /// let repo = Repository::from_remote_url("https://github.com/rust-lang/rust.git").unwrap();
    /// assert_eq!(repo.full_name(), "rust-lang/rust");
    /// ```
    pub fn from_remote_url(url: &str) -> Result<Self> {
        let url = url.trim();

        // scp-like syntax: git@host:owner/repo
        let path = if let Some((_, path)) = url
            .strip_prefix("git@")
            .and_then(|rest| rest.split_once(':'))
        {
            path
        } else {
            // URL syntax: scheme://[user@]host/owner/repo
            let rest = url
                .split_once("://")
                .map_or(url, |(_, rest)| rest);
            let rest = rest.split_once('@').map_or(rest, |(_, rest)| rest);
            rest.split_once('/')
                .map(|(_, path)| path)
                .ok_or_else(|| {
                    ConfigError::InvalidRepository(format!("no repository path in '{url}'"))
                })?
        };

        let path = path.trim_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        Self::parse(path)
    }

    /// Resolves the repository the current process should operate on.
    ///
    /// Tries the following sources in order:
    ///
    /// 1. The `GH_REPO` environment variable (`"owner/repo"`)
    /// 2. The `origin` remote of the enclosing git repository
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRepository`] if `GH_REPO` is set but
    /// malformed, and [`ConfigError::NoRepository`] if no source yields a
    /// repository (not inside a git repository, no `origin` remote, or git
    /// not installed).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use twig_config::Repository;
    ///
    /// # async fn example() -> twig_config::Result<()> {
    /// let repo = Repository::current().await?;
    /// println!("{}", repo.full_name());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn current() -> Result<Self> {
        if let Ok(spec) = std::env::var("GH_REPO") {
            return Self::parse(&spec);
        }

        let url = origin_remote_url().await?;
        Self::from_remote_url(&url)
    }

    /// Returns the repository owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Returns the full repository name in `"owner/repo"` format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Reads the URL of the `origin` remote via `git remote get-url origin`.
async fn origin_remote_url() -> Result<String> {
    use tokio::process::Command;

    let output = match Command::new("git")
        .args(["remote", "get-url", "origin"])
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::NoRepository {
                reason: "git is not installed".to_string(),
            });
        }
        Err(e) => {
            return Err(ConfigError::GitCommand(e));
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(ConfigError::NoRepository {
            reason: if stderr.is_empty() {
                "run this command from inside a git repository".to_string()
            } else {
                stderr
            },
        });
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if url.is_empty() {
        return Err(ConfigError::NoRepository {
            reason: "the 'origin' remote has no URL".to_string(),
        });
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let repo = Repository::parse("rust-lang/rust").unwrap();
        assert_eq!(repo.owner(), "rust-lang");
        assert_eq!(repo.repo(), "rust");
    }

    #[test]
    fn parse_with_whitespace() {
        let repo = Repository::parse("  owner / repo  ").unwrap();
        assert_eq!(repo.owner(), "owner");
        assert_eq!(repo.repo(), "repo");
    }

    #[test]
    fn parse_invalid_no_slash() {
        assert!(Repository::parse("invalid").is_err());
    }

    #[test]
    fn parse_invalid_too_many_slashes() {
        assert!(Repository::parse("too/many/slashes").is_err());
    }

    #[test]
    fn parse_invalid_empty_parts() {
        assert!(Repository::parse("/repo").is_err());
        assert!(Repository::parse("owner/").is_err());
        assert!(Repository::parse("/").is_err());
    }

    #[test]
    fn from_remote_url_https() {
        let repo = Repository::from_remote_url("https://github.com/rust-lang/rust.git").unwrap();
        assert_eq!(repo.full_name(), "rust-lang/rust");
    }

    #[test]
    fn from_remote_url_https_without_git_suffix() {
        let repo = Repository::from_remote_url("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(repo.full_name(), "rust-lang/rust");
    }

    #[test]
    fn from_remote_url_scp_like() {
        let repo = Repository::from_remote_url("git@github.com:tokio-rs/tokio.git").unwrap();
        assert_eq!(repo.full_name(), "tokio-rs/tokio");
    }

    #[test]
    fn from_remote_url_ssh_scheme() {
        let repo = Repository::from_remote_url("ssh://git@github.com/serde-rs/serde.git").unwrap();
        assert_eq!(repo.full_name(), "serde-rs/serde");
    }

    #[test]
    fn from_remote_url_trailing_newline() {
        let repo = Repository::from_remote_url("https://github.com/owner/repo.git\n").unwrap();
        assert_eq!(repo.full_name(), "owner/repo");
    }

    #[test]
    fn from_remote_url_rejects_hostname_only() {
        assert!(Repository::from_remote_url("https://github.com").is_err());
    }

    #[test]
    fn from_remote_url_rejects_nested_path() {
        assert!(Repository::from_remote_url("https://github.com/a/b/c").is_err());
    }

    #[test]
    fn full_name_format() {
        let repo = Repository::new("owner", "repo");
        assert_eq!(repo.full_name(), "owner/repo");
    }
}
