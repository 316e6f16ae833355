//! HTTP Remote Store
//!
//! REST client for the mission collection:
//!
//! | Verb   | Path            | Body            |
//! |--------|-----------------|-----------------|
//! | GET    | /missions       |                 |
//! | GET    | /missions/{id}  |                 |
//! | POST   | /missions       | mission w/o id  |
//! | PUT    | /missions/{id}  | partial mission |
//! | DELETE | /missions/{id}  |                 |

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use super::traits::RemoteStore;
use crate::config::StoreConfig;
use crate::domain::{Mission, MissionDraft, MissionPatch};
use crate::error::{StoreError, StoreResult};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Remote store backed by the mission REST API
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    missions_url: String,
}

impl HttpStore {
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let builder = Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.request_timeout_secs {
            Some(secs) => builder.timeout(std::time::Duration::from_secs(secs)),
            None => builder,
        };

        Ok(Self {
            client: builder.build()?,
            missions_url: format!("{}/missions", config.normalized_base_url()),
        })
    }

    /// Collection URL, `{base}/missions`
    pub fn missions_url(&self) -> &str {
        &self.missions_url
    }

    /// Member URL, `{base}/missions/{id}` with the id percent-encoded
    pub fn mission_url(&self, id: &str) -> String {
        format!("{}/{}", self.missions_url, utf8_percent_encode(id, PATH_SEGMENT))
    }
}

/// Which call a response belongs to; decides how failures are classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Request {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Request {
    /// Member requests address one mission, so a 404 means that mission is gone
    fn addresses_member(self) -> bool {
        matches!(self, Request::Get | Request::Update | Request::Delete)
    }
}

#[async_trait(?Send)]
impl RemoteStore for HttpStore {
    async fn list(&self) -> StoreResult<Vec<Mission>> {
        log::debug!("GET {}", self.missions_url);
        let response = self.client.get(&self.missions_url).send().await?;
        let response = ensure_success(response, Request::List, &self.missions_url).await?;
        Ok(response.json().await?)
    }

    async fn get(&self, id: &str) -> StoreResult<Mission> {
        let url = self.mission_url(id);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, Request::Get, id).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, draft: &MissionDraft) -> StoreResult<Mission> {
        log::debug!("POST {} ({})", self.missions_url, draft.name);
        let response = self.client.post(&self.missions_url).json(draft).send().await?;
        let response = ensure_success(response, Request::Create, &self.missions_url).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &str, patch: &MissionPatch) -> StoreResult<Mission> {
        let url = self.mission_url(id);
        log::debug!("PUT {}", url);
        let response = self.client.put(&url).json(patch).send().await?;
        let response = ensure_success(response, Request::Update, id).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let url = self.mission_url(id);
        log::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        ensure_success(response, Request::Delete, id).await?;
        Ok(())
    }
}

/// Pass successful responses through, turn everything else into a `StoreError`
async fn ensure_success(response: Response, request: Request, subject: &str) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let err = classify_failure(request, status, &body, subject);
    log::warn!("{:?} request for {} failed with {}: {}", request, subject, status, err);
    Err(err)
}

/// Error payload shape commonly returned by the API (`{"message": "..."}`)
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: String,
}

/// Map a non-success status to the store error taxonomy.
///
/// Only member requests report `NotFound` and only `create` reports
/// `Validation`; every other failure is a transport failure.
pub(crate) fn classify_failure(
    request: Request,
    status: StatusCode,
    body: &str,
    subject: &str,
) -> StoreError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .ok()
        .filter(|m| !m.trim().is_empty());

    match status {
        StatusCode::NOT_FOUND if request.addresses_member() => {
            StoreError::NotFound(subject.to_string())
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY if request == Request::Create => {
            StoreError::Validation(message.unwrap_or_else(|| format!("{} rejected by {}", status, subject)))
        }
        _ => StoreError::Transport(match message {
            Some(message) => format!("{}: {}", status, message),
            None => status.to_string(),
        }),
    }
}
