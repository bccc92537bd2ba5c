//! GitHub API client implementation.
//!
//! This module provides the [`GraphQl`] transport seam the tree fetcher is
//! written against, and [`GitHubClient`], the production implementation on
//! top of octocrab.

use async_trait::async_trait;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// A GraphQL query executor.
///
/// One operation: run a query document with a variable mapping and return
/// the response `data`. Authentication, connection reuse, and
/// protocol-level concerns live behind this seam; callers see either a
/// structured response or an error. The tree fetcher is generic over this
/// trait so tests can substitute a scripted transport.
#[async_trait]
pub trait GraphQl {
    /// Executes a GraphQL query.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails at the transport level or if the
    /// response carries a GraphQL `errors` array. Errors surface unchanged
    /// to the caller; this layer does not retry.
    async fn execute(&self, query: &str, variables: Value) -> Result<Value>;
}

/// GitHub API client with optional authentication.
///
/// The client supports both authenticated and unauthenticated access.
/// Authenticated clients have higher rate limits (5,000 req/hour vs 60
/// req/hour) and can access private repositories.
///
/// # Security
///
/// Tokens are stored using [`SecretString`] to prevent accidental logging
/// or exposure in debug output.
///
/// # Examples
///
/// ```no_run
/// use secrecy::SecretString;
/// use twig_github::GitHubClient;
///
/// # async fn example() -> twig_github::Result<()> {
/// let token = SecretString::from("ghp_your_token".to_string());
/// let client = GitHubClient::new(Some(token)).await?;
/// assert!(client.is_authenticated());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GitHubClient {
    /// The underlying octocrab client.
    inner: Octocrab,
    /// Whether this client is authenticated.
    authenticated: bool,
}

impl GitHubClient {
    /// Creates a new GitHub client.
    ///
    /// # Arguments
    ///
    /// * `token` - Optional GitHub personal access token. If `Some`, the
    ///   client will be authenticated with higher rate limits. If `None`,
    ///   the client will be unauthenticated with lower rate limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the octocrab client fails to initialize.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use secrecy::SecretString;
    /// use twig_github::GitHubClient;
    ///
    /// # async fn example() -> twig_github::Result<()> {
    /// let token = SecretString::from("ghp_xxx".to_string());
    /// let auth_client = GitHubClient::new(Some(token)).await?;
    ///
    /// let unauth_client = GitHubClient::new(None).await?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(token), fields(authenticated = token.is_some()))]
    pub async fn new(token: Option<SecretString>) -> Result<Self> {
        let (inner, authenticated) = match token {
            Some(token) => {
                debug!("creating authenticated GitHub client");
                let client = Octocrab::builder()
                    .personal_token(token.expose_secret())
                    .build()
                    .map_err(Error::Api)?;
                (client, true)
            }
            None => {
                debug!("creating unauthenticated GitHub client");
                let client = Octocrab::builder().build().map_err(Error::Api)?;
                (client, false)
            }
        };

        Ok(Self {
            inner,
            authenticated,
        })
    }

    /// Returns whether this client is authenticated.
    ///
    /// This reflects the authentication state at client creation time; it
    /// does not verify the token is still valid.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Returns a reference to the underlying octocrab client.
    #[must_use]
    pub fn inner(&self) -> &Octocrab {
        &self.inner
    }
}

#[async_trait]
impl GraphQl for GitHubClient {
    #[instrument(skip(self, query, variables))]
    async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        debug!(%variables, "executing GraphQL query");
        let payload = serde_json::json!({ "query": query, "variables": variables });
        let response: Value = self.inner.graphql(&payload).await.map_err(Error::Api)?;
        unwrap_envelope(response)
    }
}

/// Extracts `data` from a GraphQL response envelope.
///
/// GitHub reports query-level failures as an `errors` array with HTTP 200;
/// those become [`Error::Graph`]. A response with neither usable `data` nor
/// `errors` is also an error, never an empty success.
fn unwrap_envelope(mut response: Value) -> Result<Value> {
    if let Some(errors) = response.get("errors").and_then(Value::as_array)
        && !errors.is_empty()
    {
        let messages = errors
            .iter()
            .map(|e| {
                e.get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown GraphQL error")
                    .to_string()
            })
            .collect();
        return Err(Error::Graph { messages });
    }

    match response.get_mut("data") {
        Some(data) if !data.is_null() => Ok(data.take()),
        _ => Err(Error::Graph {
            messages: vec!["response contained no data".to_string()],
        }),
    }
}
