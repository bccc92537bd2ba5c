//! twig - render a GitHub issue and its sub-issue tree as Markdown.
//!
//! This binary wires the library crates together: parse the issue number,
//! resolve the repository context and a token, fetch the issue tree, and
//! print the rendered document to stdout.

use anyhow::{Context, bail};
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;
use twig_config::{Repository, auth};
use twig_github::{GitHubClient, fetch_issue_tree};
use twig_render::render_markdown;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout carries only the rendered document.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let number = parse_args(std::env::args().skip(1))?;

    let repo = Repository::current().await?;
    tracing::debug!(repo = %repo.full_name(), number, "fetching issue tree");

    let token = auth::resolve_token().await.map(SecretString::from);
    let client = GitHubClient::new(token)
        .await
        .context("creating GitHub client")?;

    let tree = fetch_issue_tree(&client, repo.owner(), repo.repo(), number).await?;
    print!("{}", render_markdown(&tree));
    Ok(())
}

/// Parses the single positional argument: the issue number.
fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<u64> {
    let Some(raw) = args.next() else {
        bail!("usage: twig <issue-number>");
    };
    raw.parse()
        .with_context(|| format!("invalid issue number {raw:?}"))
}
