// Async HTTP client for the event-operations backend.
//
// Collections live at `/{resource}/` (trailing slash) and records at
// `/{resource}/{id}`. Status changes are PATCHes with the new value in the
// query string, never in a JSON body.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::retry::{self, RetryPolicy};
use crate::transport::TransportConfig;

// ── Error response shape (FastAPI) ───────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    detail: Option<ErrorDetail>,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),
    Other(serde_json::Value),
}

#[derive(serde::Deserialize)]
struct ValidationIssue {
    #[serde(default)]
    loc: Vec<serde_json::Value>,
    msg: String,
}

impl ErrorDetail {
    fn into_message(self) -> String {
        match self {
            Self::Message(msg) => msg,
            Self::Validation(issues) => issues
                .into_iter()
                .map(|issue| {
                    let loc: Vec<String> = issue
                        .loc
                        .iter()
                        .map(|part| match part {
                            serde_json::Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect();
                    if loc.is_empty() {
                        issue.msg
                    } else {
                        format!("{}: {}", loc.join("."), issue.msg)
                    }
                })
                .collect::<Vec<_>>()
                .join("; "),
            Self::Other(value) => value.to_string(),
        }
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the event-operations REST backend.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
    retry: RetryPolicy,
    timeout_secs: u64,
}

impl BackendClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport settings.
    pub fn new(
        base_url: &str,
        transport: &TransportConfig,
        retry: RetryPolicy,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(Url::parse(base_url)?)?;
        Ok(Self {
            http,
            base_url,
            retry,
            timeout_secs: transport.timeout.as_secs(),
        })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        retry: RetryPolicy,
    ) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            retry,
            timeout_secs: 0,
        })
    }

    /// Ensure the base path ends with `/` so relative joins keep any prefix
    /// (e.g. a backend mounted under `/api`).
    fn normalize_base_url(mut url: Url) -> Result<Url, Error> {
        if url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl {
                url: url.to_string(),
            });
        }
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append path segments onto the base URL, percent-encoding each one.
    ///
    /// Pass a trailing `""` to get the collection form (`/zones/`).
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, Error> {
        self.get_with_params(segments, &[] as &[(&str, &str)]).await
    }

    /// GET with a serializable query (`None` fields are skipped by the query
    /// structs). The only verb that is retried.
    pub(crate) async fn get_with_params<T, Q>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        debug!("GET {url}");

        let resp = retry::send_with_retry(&self.retry, || self.http.get(url.clone()).query(query))
            .await
            .map_err(|e| self.transport_error(e))?;
        self.handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.handle_response(resp).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        form: reqwest::multipart::Form,
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("POST {url} (multipart)");

        let resp = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.handle_response(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("PUT {url}");

        let resp = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.handle_response(resp).await
    }

    /// PATCH carrying its arguments in the query string and no body.
    pub(crate) async fn patch_with_params<T, Q>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        debug!("PATCH {url}");

        let resp = self
            .http
            .patch(url)
            .query(query)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.handle_response(resp).await
    }

    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<(), Error> {
        let url = self.url(segments)?;
        debug!("DELETE {url}");

        let resp = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.handle_empty(resp).await
    }

    pub(crate) async fn delete_with_response<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("DELETE {url}");

        let resp = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() && self.timeout_secs > 0 {
            Error::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            Error::Transport(err)
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let path = resp.url().path().to_owned();
        let raw = resp.text().await.unwrap_or_default();

        let message = match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(ErrorResponse {
                detail: Some(detail),
            }) => detail.into_message(),
            _ if raw.is_empty() => status.to_string(),
            _ => raw,
        };

        match status {
            reqwest::StatusCode::NOT_FOUND => Error::NotFound { path, message },
            reqwest::StatusCode::TOO_MANY_REQUESTS => Error::RateLimited,
            _ => Error::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> BackendClient {
        BackendClient::with_client(
            reqwest::Client::new(),
            Url::parse(base).unwrap(),
            RetryPolicy::none(),
        )
        .unwrap()
    }

    #[test]
    fn collection_urls_keep_trailing_slash() {
        let c = client("http://localhost:8000");
        assert_eq!(
            c.url(&["zones", ""]).unwrap().as_str(),
            "http://localhost:8000/zones/"
        );
    }

    #[test]
    fn base_path_prefix_is_preserved() {
        let c = client("http://host/api");
        assert_eq!(
            c.url(&["events", "EVT1"]).unwrap().as_str(),
            "http://host/api/events/EVT1"
        );
    }

    #[test]
    fn record_ids_are_percent_encoded() {
        let c = client("http://host/");
        assert_eq!(
            c.url(&["lost-persons", "a b/c"]).unwrap().as_str(),
            "http://host/lost-persons/a%20b%2Fc"
        );
    }

    #[test]
    fn non_base_urls_are_rejected() {
        let result = BackendClient::with_client(
            reqwest::Client::new(),
            Url::parse("mailto:ops@example.com").unwrap(),
            RetryPolicy::none(),
        );
        assert!(matches!(result, Err(Error::InvalidBaseUrl { .. })));
    }

    #[test]
    fn validation_detail_is_flattened() {
        let raw = r#"{"detail":[{"loc":["body","capacity"],"msg":"field required","type":"missing"}]}"#;
        let parsed: ErrorResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.detail.unwrap().into_message(),
            "body.capacity: field required"
        );
    }
}
