//! HTTP client for the omikuji service JSON API
//!
//! The service is an external collaborator; everything here is plain HTTP
//! against its JSON surface. Redirects are never followed: the service
//! redirects unauthenticated requests to its login page, and following that
//! would turn an auth failure into a confusing HTML payload.

pub mod session;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{header, redirect, Client, Method, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{
    DRAW_ENDPOINT, FETCH_TIMEOUT_SECS, LOGIN_ENDPOINT, NOT_LOGGED_IN_MESSAGE, REGISTER_ENDPOINT,
    TOPICS_ENDPOINT,
};
use crate::sequencer::{DrawFetcher, DrawResult, FetchError};
use session::Session;

/// One topic row as served by `GET /topics`
#[derive(Clone, Debug, Deserialize)]
pub struct Topic {
    #[serde(deserialize_with = "crate::sequencer::outcome::id_from_scalar")]
    pub id: String,
    pub slug: Option<String>,
    pub title: String,
    pub created_at: Option<String>,
}

#[derive(Serialize)]
struct NewTopic<'a> {
    title: &'a str,
    body: &'a str,
}

#[derive(Deserialize)]
struct CreatedTopic {
    #[serde(deserialize_with = "crate::sequencer::outcome::id_from_scalar")]
    id: String,
}

#[derive(Deserialize)]
struct ServiceError {
    error: String,
}

/// Client for the omikuji service
///
/// Carries the stored login session (if any) and attaches it to every
/// request; the service decides which operations actually need it.
pub struct ApiClient {
    http: Client,
    server_url: Url,
    session: Option<Session>,
}

impl ApiClient {
    /// Builds a client for the given service base URL, picking up any
    /// persisted login session
    pub fn new(server_url: Url) -> Result<Self> {
        Self::with_session(server_url, session::load())
    }

    pub fn with_session(server_url: Url, session: Option<Session>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .redirect(redirect::Policy::none())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(ApiClient {
            http,
            server_url,
            session,
        })
    }

    /// Resolves an endpoint path against the service base URL
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.server_url.clone();
        if let Ok(mut parts) = url.path_segments_mut() {
            parts.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        if let Some(session) = &self.session {
            builder = builder.header(header::COOKIE, session.cookie_header());
        }
        builder
    }

    /// Extracts the service's `{"error": ...}` message, falling back to the
    /// HTTP status when the body is not in that shape
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ServiceError>().await {
            Ok(body) => body.error,
            Err(_) => format!("service returned HTTP {status}"),
        }
    }

    /// Asks the service to draw a random topic
    ///
    /// Any deviation from a 2xx JSON `{"id": ...}` response is a fetch
    /// failure; callers collapse all of them into the same outcome.
    pub async fn fetch_draw(&self) -> Result<DrawResult, FetchError> {
        let response = self
            .request(Method::GET, self.endpoint(&[DRAW_ENDPOINT]))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<DrawResult>()
            .await
            .map_err(|e| FetchError::Payload(e.to_string()))
    }

    /// Lists topics, newest first as the service orders them
    pub async fn list_topics(&self) -> Result<Vec<Topic>> {
        let response = self
            .request(Method::GET, self.endpoint(&[TOPICS_ENDPOINT]))
            .send()
            .await
            .context("Failed to reach the omikuji service")?;

        if !response.status().is_success() {
            bail!(Self::error_message(response).await);
        }
        response
            .json::<Vec<Topic>>()
            .await
            .context("Unexpected topic list payload")
    }

    /// Creates a topic; requires a login session on the service side
    pub async fn create_topic(&self, title: &str, body: &str) -> Result<String> {
        let response = self
            .request(Method::POST, self.endpoint(&[TOPICS_ENDPOINT]))
            .json(&NewTopic { title, body })
            .send()
            .await
            .context("Failed to reach the omikuji service")?;

        let status = response.status();
        if status.is_redirection() {
            bail!(NOT_LOGGED_IN_MESSAGE);
        }
        if !status.is_success() {
            bail!(Self::error_message(response).await);
        }

        let created: CreatedTopic = response
            .json()
            .await
            .context("Unexpected create-topic payload")?;
        Ok(created.id)
    }

    /// Deletes a topic; admin-only on the service side
    pub async fn delete_topic(&self, id: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, self.endpoint(&[TOPICS_ENDPOINT, id]))
            .send()
            .await
            .context("Failed to reach the omikuji service")?;

        let status = response.status();
        if status.is_redirection() {
            bail!(NOT_LOGGED_IN_MESSAGE);
        }
        match status.as_u16() {
            204 => Ok(()),
            403 => bail!("The service refused the deletion (admin role required)."),
            404 => bail!("No topic with id '{id}'."),
            _ => bail!(Self::error_message(response).await),
        }
    }

    /// Logs in via the service's form endpoint and captures the session
    /// cookie; the service answers a redirect on success and re-renders the
    /// form on failure
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        self.submit_credentials(LOGIN_ENDPOINT, username, password, "Authentication failed.")
            .await
    }

    /// Registers a new account; the service auto-logs the new user in, so
    /// success has the same redirect-plus-cookie shape as a login
    pub async fn register(&self, username: &str, password: &str) -> Result<Session> {
        self.submit_credentials(
            REGISTER_ENDPOINT,
            username,
            password,
            "Registration failed (username may already be taken).",
        )
        .await
    }

    /// Shared form POST for the credential endpoints: redirect means
    /// success, anything else re-rendered the form
    async fn submit_credentials(
        &self,
        endpoint: &str,
        username: &str,
        password: &str,
        failure_message: &str,
    ) -> Result<Session> {
        let response = self
            .http
            .request(Method::POST, self.endpoint(&[endpoint]))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .context("Failed to reach the omikuji service")?;

        if !response.status().is_redirection() {
            bail!("{failure_message}");
        }

        extract_session_cookie(response.headers())
            .context("The service accepted the credentials but set no session cookie")
    }
}

#[async_trait]
impl DrawFetcher for ApiClient {
    async fn fetch_draw(&self) -> Result<DrawResult, FetchError> {
        ApiClient::fetch_draw(self).await
    }
}

/// Pulls the `session` cookie value out of `Set-Cookie` response headers
///
/// Headers that are not visible ASCII are skipped, not fatal: the session
/// cookie may sit in a later header.
fn extract_session_cookie(headers: &header::HeaderMap) -> Option<Session> {
    for value in headers.get_all(header::SET_COOKIE) {
        let Ok(raw) = value.to_str() else {
            continue;
        };
        if let Some(rest) = raw.strip_prefix("session=") {
            let cookie = rest.split(';').next().unwrap_or(rest).to_string();
            if !cookie.is_empty() {
                return Some(Session { cookie });
            }
        }
    }
    None
}
