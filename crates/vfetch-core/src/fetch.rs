//! Blocking HTTP GET helpers.
//!
//! Each endpoint is fetched with a single unconditional GET and the body is
//! buffered in memory (the pinned installer is tens of megabytes). Success is
//! strictly HTTP 200; anything else is an explicit `FetchError`, so no stage
//! downstream ever sees partial or undefined data.

use crate::config::HttpConfig;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single GET: transport-level, or a non-200 status.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported a transport failure (DNS, TLS, refused, timeout).
    #[error("transfer failed for {url}: {source}")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Response completed with a non-200 status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
}

/// Fetch `url` with one GET and return the full response body.
///
/// Follows redirects (mirror hosts redirect by geography); timeouts come from
/// config. No retry: the caller treats any failure as terminal.
pub fn fetch_bytes(url: &str, http: &HttpConfig) -> Result<Vec<u8>, FetchError> {
    let curl_err = |source: curl::Error| FetchError::Curl {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.max_redirections(10).map_err(curl_err)?;
    easy.connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .map_err(curl_err)?;
    easy.timeout(Duration::from_secs(http.timeout_secs))
        .map_err(curl_err)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(curl_err)?;
        transfer.perform().map_err(curl_err)?;
    }

    let status = easy.response_code().map_err(curl_err)?;
    if status != 200 {
        return Err(FetchError::Http {
            url: url.to_string(),
            status,
        });
    }

    tracing::debug!(url, len = body.len(), "GET ok");
    Ok(body)
}
