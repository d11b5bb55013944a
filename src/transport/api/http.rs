//! HTTP implementation of [`MessageApi`] on top of `reqwest`.

use super::http_client::build_api_client;
use super::traits::{ApiFuture, MessageApi};
use crate::config::ApiConfig;
use crate::error::{ClientError, TransportError};
use crate::message::{ApiRevision, Message, SubmitReceipt, parse_history, parse_receipt};
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

pub struct HttpMessageApi {
    base_url: String,
    /// Pre-computed messages resource URL (avoids `format!` per request).
    messages_url: Url,
    revision: ApiRevision,
    client: Client,
}

impl HttpMessageApi {
    pub fn new(base_url: &str, revision: ApiRevision) -> Result<Self, url::ParseError> {
        Self::with_client(base_url, revision, build_api_client(&ApiConfig::default()))
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, url::ParseError> {
        Self::with_client(
            &config.base_url,
            config.revision,
            build_api_client(config),
        )
    }

    fn with_client(
        base_url: &str,
        revision: ApiRevision,
        client: Client,
    ) -> Result<Self, url::ParseError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        let path = revision.messages_path();
        let parsed = Url::parse(&base_url)?;
        // Only a base whose whole path is the resource counts as the endpoint.
        let messages_url = if parsed.path().trim_end_matches('/') == path {
            parsed
        } else {
            Url::parse(&format!("{base_url}{path}"))?
        };

        Ok(Self {
            base_url,
            messages_url,
            revision,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn messages_url(&self) -> &Url {
        &self.messages_url
    }

    pub fn revision(&self) -> ApiRevision {
        self.revision
    }
}

/// Body of a successful response, or the status and body text as an error.
async fn success_body(response: Response) -> Result<String, ClientError> {
    let status = response.status();
    let body = response.text().await.map_err(TransportError::from)?;
    if status.is_success() {
        Ok(body)
    } else {
        debug!(status = status.as_u16(), "api.non_success");
        Err(TransportError::Status {
            status: status.as_u16(),
            body,
        }
        .into())
    }
}

impl MessageApi for HttpMessageApi {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch_messages(&self) -> ApiFuture<'_, Vec<Message>> {
        Box::pin(async move {
            let response = self
                .client
                .get(self.messages_url.clone())
                .header(ACCEPT, "application/json")
                .send()
                .await
                .map_err(TransportError::from)?;
            let body = success_body(response).await?;
            Ok(parse_history(&body)?)
        })
    }

    fn post_message<'a>(
        &'a self,
        kind: &'a str,
        content: &'a str,
    ) -> ApiFuture<'a, SubmitReceipt> {
        Box::pin(async move {
            let response = self
                .client
                .post(self.messages_url.clone())
                .form(&self.revision.submission_form(kind, content))
                .send()
                .await
                .map_err(TransportError::from)?;
            let body = success_body(response).await?;
            Ok(parse_receipt(&body, self.revision)?)
        })
    }
}
