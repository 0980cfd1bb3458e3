//! Shared construction of outbound HTTP clients.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while setting up an outbound client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Builds a reqwest client identifying this crate, with an optional overall
/// request timeout.
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, ClientError> {
    let mut builder = reqwest::Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

/// Parses `url`, keeping the offending input in the error.
pub fn parse_url(url: &str) -> Result<url::Url, ClientError> {
    url::Url::parse(url).map_err(|source| ClientError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}
