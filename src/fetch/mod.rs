// src/fetch/mod.rs

use crate::config::FetchOptions;
use crate::error::{Error, Result};
use reqwest::{header, Client};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// Build the HTTP client used for document fetches.
pub fn build_client(opts: &FetchOptions) -> Result<Client> {
    Ok(Client::builder()
        .timeout(opts.timeout())
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Check that `input` is an absolute http(s) URL.
pub fn parse_source_url(input: &str) -> Result<Url> {
    let invalid = |reason: String| Error::InvalidInput {
        input: input.to_string(),
        reason,
    };
    let url = Url::parse(input.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme `{}`", other))),
    }
}

async fn get_text_core(client: &Client, url: &Url) -> Result<String> {
    debug!("Fetching text from {}", url);
    let resp = client
        .get(url.clone())
        .header(header::ACCEPT, "text/html")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::SourceUnavailable {
            url: url.to_string(),
            status,
        });
    }
    Ok(resp.text().await?)
}

fn is_retryable(err: &Error) -> bool {
    match err {
        Error::Http(_) => true,
        Error::SourceUnavailable { status, .. } => status.is_server_error(),
        _ => false,
    }
}

/// GET `url` as HTML, retrying transport failures and 5xx responses with
/// exponential backoff. Client errors (4xx) are returned straight away.
#[instrument(level = "info", skip(client, opts), fields(url = %url))]
pub async fn fetch_document(client: &Client, url: &Url, opts: &FetchOptions) -> Result<String> {
    let mut attempts = 0;
    loop {
        match get_text_core(client, url).await {
            Ok(t) => {
                debug!(bytes = t.len(), "fetched document");
                return Ok(t);
            }
            Err(e) if attempts < opts.max_retries && is_retryable(&e) => {
                attempts += 1;
                let backoff = opts.initial_backoff_ms * 2u64.pow(attempts - 1);
                warn!(%url, attempt = attempts, delay_ms = backoff, error = %e, "Retrying");
                sleep(Duration::from_millis(backoff)).await;
            }
            Err(e) => {
                error!(%url, error = %e, "Fetch failed");
                return Err(e);
            }
        }
    }
}
