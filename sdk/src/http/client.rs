use crate::error::TimestreamError;
use crate::utils::request_id::{RequestId, REQUEST_ID_HEADER};
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Url;

/// Thin wrapper over `reqwest` shared by both REST transports.
#[derive(Debug, Clone)]
pub struct HttpClient {
    pub api_url: Url,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(api_url: &str) -> Result<Self, TimestreamError> {
        let api_url = Url::parse(api_url).map_err(|_| TimestreamError::CannotParseUrl)?;
        Ok(Self {
            api_url,
            client: reqwest::Client::new(),
        })
    }

    /// Posts a raw body and returns the raw response body; any non-success
    /// status is turned into [`TimestreamError::Rejected`].
    pub async fn post_raw(
        &self,
        path: &str,
        content_type: &'static str,
        body: Vec<u8>,
        req_id: &RequestId,
    ) -> Result<Bytes, TimestreamError> {
        let url = self.get_url(path)?;
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .header(ACCEPT, content_type)
            .header(REQUEST_ID_HEADER, req_id.as_str())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Err(TimestreamError::Rejected {
                status: status.to_string(),
                reason,
            });
        }

        Ok(response.bytes().await?)
    }

    pub fn get_url(&self, path: &str) -> Result<Url, TimestreamError> {
        self.api_url
            .join(path)
            .map_err(|_| TimestreamError::CannotParseUrl)
    }
}
