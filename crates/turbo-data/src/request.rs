//! Outbound GET requests.

use std::time::Duration;

use crate::{FetchError, Response};

/// A GET request bound to a client, ready to send.
#[derive(Debug)]
pub struct Request {
    client: reqwest::Client,
    url: String,
    accept: Option<String>,
    timeout: Option<Duration>,
}

impl Request {
    pub(crate) fn new(client: reqwest::Client, url: String, timeout: Option<Duration>) -> Self {
        Self {
            client,
            url,
            accept: None,
            timeout,
        }
    }

    /// The fully resolved request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Set the Accept header.
    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.accept = Some(content_type.into());
        self
    }

    /// Send the request and buffer the response.
    ///
    /// Any status is returned as a [`Response`]; use
    /// [`Response::error_for_status`] to reject non-2xx replies.
    pub async fn send(self) -> Result<Response, FetchError> {
        let mut request = self.client.get(&self.url);
        if let Some(accept) = &self.accept {
            request = request.header(reqwest::header::ACCEPT, accept.as_str());
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!(url = %self.url, "sending request");

        let response = request.send().await?;
        let response = Response::read(response).await?;

        tracing::debug!(url = %self.url, status = response.status, "received response");

        Ok(response)
    }
}
