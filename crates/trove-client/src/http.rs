//! Thin reqwest wrapper shared by the collaborators.

use std::time::Duration;

use reqwest::Client;

use crate::error::ClientError;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// GET `url`, reading at most `max_bytes` of the body.
    pub async fn get_prefix(
        &self,
        url: &str,
        max_bytes: usize,
    ) -> Result<(u16, String), ClientError> {
        let mut response = self.client.get(url).send().await?;
        let status = response.status().as_u16();

        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            let remaining = max_bytes - body.len();
            if chunk.len() >= remaining {
                body.extend_from_slice(&chunk[..remaining]);
                break;
            }
            body.extend_from_slice(&chunk);
        }

        Ok((status, String::from_utf8_lossy(&body).into_owned()))
    }

    /// GET `url` for its side effect; the body is dropped.
    pub async fn get_status(&self, url: &str) -> Result<u16, ClientError> {
        let response = self.client.get(url).send().await?;
        Ok(response.status().as_u16())
    }
}
