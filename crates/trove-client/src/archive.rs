//! Web-archive snapshot requests.

use std::time::Duration;

use crate::error::ClientError;
use crate::http::HttpClient;

pub const DEFAULT_ARCHIVE_ENDPOINT: &str = "https://web.archive.org/save/";

const ARCHIVE_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ArchiveNotifier {
    client: HttpClient,
    endpoint: String,
}

impl ArchiveNotifier {
    pub fn new(user_agent: &str, endpoint: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            client: HttpClient::new(user_agent, ARCHIVE_TIMEOUT)?,
            endpoint: endpoint.into(),
        })
    }

    /// Request preservation of `url`. Fire-and-forget: the caller logs any
    /// error as a warning and carries on.
    pub async fn notify(&self, url: &str) -> Result<(), ClientError> {
        let save_url = snapshot_url(&self.endpoint, url);
        let status = self.client.get_status(&save_url).await?;
        if !(200..400).contains(&status) {
            return Err(ClientError::Status {
                status,
                url: save_url,
            });
        }
        tracing::debug!(url, "archive snapshot requested");
        Ok(())
    }
}

fn snapshot_url(endpoint: &str, url: &str) -> String {
    format!("{endpoint}{url}")
}
