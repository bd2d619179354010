// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared HTTP plumbing.
//!
//! Every request flows through [`Transport::send`]: bearer attachment,
//! dispatch, and failure classification happen in exactly one place. No
//! call is ever retried automatically.

use crate::envelope::{Envelope, ListData, Page};
use crate::session::SessionHandle;
use dealer_hub::BackendError;
use dealer_hub_domain::Resource;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// The shared transport behind every sub-client.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base: Url,
    session: SessionHandle,
}

impl Transport {
    pub(crate) const fn new(http: reqwest::Client, base: Url, session: SessionHandle) -> Self {
        Self {
            http,
            base,
            session,
        }
    }

    pub(crate) const fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Dispatches a request and decodes the response body as `T`.
    ///
    /// # Errors
    ///
    /// Returns a classified [`BackendError`] for transport failures,
    /// non-2xx statuses, and undecodable bodies. A 401 additionally tears
    /// the session down.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<T, BackendError> {
        let url: Url = self.base.join(path).map_err(|err| BackendError::Decode {
            message: format!("invalid endpoint '{path}': {err}"),
        })?;

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(token) = self.session.bearer_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, %url, "dispatching request");
        let response = request.send().await.map_err(|err| BackendError::Transient {
            message: err.to_string(),
        })?;

        let status: StatusCode = response.status();
        let text: String = response.text().await.map_err(|err| BackendError::Transient {
            message: err.to_string(),
        })?;

        if !status.is_success() {
            return Err(self.classify_failure(status, &text));
        }

        serde_json::from_str(&text).map_err(|err| BackendError::Decode {
            message: format!("{path}: {err}"),
        })
    }

    /// Fetches and normalizes a resource's list endpoint.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        resource: Resource,
    ) -> Result<Page<T>, BackendError> {
        let path: String = format!("api/{}", resource.path_segment());
        let envelope: Envelope<ListData<T>> = self.send(Method::GET, &path, None).await?;
        Ok(envelope
            .into_data()?
            .map_or_else(Page::empty, ListData::normalize))
    }

    /// Classifies a non-2xx response into the error taxonomy.
    fn classify_failure(&self, status: StatusCode, body: &str) -> BackendError {
        let message: String = extract_message(body, status);
        match status.as_u16() {
            401 => {
                self.session.expire();
                BackendError::SessionExpired
            }
            403 => BackendError::Forbidden { message },
            404 => BackendError::NotFound { message },
            400 | 409 => BackendError::BusinessRule { message },
            code => {
                warn!(code, "backend failure");
                BackendError::Transient {
                    message: format!("server returned {code}: {message}"),
                }
            }
        }
    }
}

/// A minimal error body, for extracting the backend's message.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Pulls the backend's message out of an error body, falling back to the
/// raw text, then to the status line.
fn extract_message(body: &str, status: StatusCode) -> String {
    if let Ok(ErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<ErrorBody>(body)
    {
        return message;
    }
    let trimmed: &str = body.trim();
    if trimmed.is_empty() {
        status.to_string()
    } else {
        trimmed.to_string()
    }
}
