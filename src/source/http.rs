//! HTTP data source for the posture monitor's `/data` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{SnapshotSource, StatusSnapshot};
use crate::error::PollError;

/// Path the posture monitor serves its latest analysis on.
pub const DEFAULT_DATA_PATH: &str = "/data";

/// A source that GETs a snapshot from an HTTP endpoint.
///
/// Requests carry no extra headers, query or body. No timeout is applied
/// unless one is given; the client default governs.
///
/// # Example
///
/// ```
/// use posture_watch::HttpSource;
///
/// let source = HttpSource::new("http://127.0.0.1:5000", "/data", None).unwrap();
/// assert_eq!(source.url(), "http://127.0.0.1:5000/data");
/// ```
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
    description: String,
}

impl HttpSource {
    /// Create a source for `endpoint` + `path`.
    pub fn new(endpoint: &str, path: &str, timeout: Option<Duration>) -> Result<Self, PollError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let url = join_url(endpoint, path);
        let description = format!("http: {}", url);
        Ok(Self {
            client,
            url,
            description,
        })
    }

    /// The full URL polled each cycle.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SnapshotSource for HttpSource {
    async fn fetch(&mut self) -> Result<StatusSnapshot, PollError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(PollError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        StatusSnapshot::from_slice(&body)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

fn join_url(endpoint: &str, path: &str) -> String {
    let base = endpoint.trim_end_matches('/');
    if path.is_empty() {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
