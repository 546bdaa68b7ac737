//! # HTTP client for the Devfolio backend
//!
//! [`ApiClient`] is the single point of contact with the backend. Each public
//! method issues exactly one request and either returns the decoded body or an
//! [`ApiError`]. Nothing is retried.
//!
//! ## Authorization
//!
//! The bearer token is read from the [`SessionVault`] on every request, so a
//! login in one part of the app is seen by the next request made anywhere else.
//! `/login` and `/signup` write the returned token and user back into the vault
//! before returning.
//!
//! ## Error mapping
//!
//! | Outcome | Error |
//! |---------|-------|
//! | connection refused, DNS, aborted transfer | [`ApiError::Network`] |
//! | non-2xx status | [`ApiError::Request`] with the body text, or the per-operation default |
//! | 2xx with an undecodable body | [`ApiError::Decode`] |
//!
//! ## Endpoints
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | POST | `/login` | no |
//! | POST | `/signup` | no |
//! | POST | `/logout` | yes |
//! | GET | `/validate` | yes |
//! | GET | `/dev/{username}` | yes |
//! | GET | `/dev/{username}/projects` | yes |
//! | GET | `/dev/{username}/{code}` | yes |
//! | POST | `/users/{username}/follow` | yes |
//! | DELETE | `/users/{username}/unfollow` | yes |
//! | GET | `/users/{username}/follow/status` | yes |
//! | PUT | `/profile/update` (multipart) | yes |
//! | GET | `/projects` | yes |
//! | POST | `/projects/create` | yes |
//! | GET | `/projects/saved` | yes |
//! | POST | `/projects/{id}/save` | yes |
//! | DELETE | `/projects/{id}/save` | yes |

use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use store::{DevfolioConfig, SessionVault};

use crate::error::ApiError;
use crate::forms::{NewProject, ProfileUpdate, SignupForm};
use crate::models::{AuthResponse, Credentials, FollowStatus, Message, Profile, Project, User};

/// Typed client for the Devfolio REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    vault: SessionVault,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, vault: SessionVault) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            vault,
        }
    }

    pub fn from_config(config: &DevfolioConfig, vault: SessionVault) -> Self {
        Self::new(config.api.base_url.clone(), vault)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn vault(&self) -> &SessionVault {
        &self.vault
    }

    /// Build `{base_url}/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(segments)?;
        let builder = self.http.request(method, url);
        Ok(match self.vault.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// Send and map failures. `fallback` is used when an error body is empty.
    async fn send(builder: RequestBuilder, fallback: &str) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = match body.trim() {
            "" => fallback.to_string(),
            text => text.to_string(),
        };
        tracing::debug!("{} -> {status}: {message}", fallback);
        Err(ApiError::Request {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Mutation acknowledgements may come back empty.
    async fn acknowledge(response: Response) -> Result<Message, ApiError> {
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Message::default());
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str], fallback: &str) -> Result<T, ApiError> {
        let response = Self::send(self.request(Method::GET, segments)?, fallback).await?;
        Self::decode(response).await
    }

    async fn mutate(&self, method: Method, segments: &[&str], fallback: &str) -> Result<Message, ApiError> {
        let response = Self::send(self.request(method, segments)?, fallback).await?;
        Self::acknowledge(response).await
    }

    /// Decode an auth response and persist it into the vault.
    async fn establish(&self, response: Response) -> Result<AuthResponse, ApiError> {
        let auth: AuthResponse = Self::decode(response).await?;
        if auth.token.trim().is_empty() {
            return Err(ApiError::Decode("response carried no token".to_string()));
        }
        if let Err(e) = self.vault.save(&auth.token, &auth.user) {
            tracing::warn!("Failed to persist session: {e}");
        }
        Ok(auth)
    }

    // ── Session ─────────────────────────────────────────────────────

    /// `POST /login`. Persists the returned token and user.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let builder = self
            .request(Method::POST, &["login"])?
            .json(&Credentials { email, password });
        let response = Self::send(builder, "Login failed").await?;
        self.establish(response).await
    }

    /// `POST /signup`. Persists the returned token and user.
    pub async fn register(&self, form: &SignupForm) -> Result<AuthResponse, ApiError> {
        let builder = self.request(Method::POST, &["signup"])?.json(form);
        let response = Self::send(builder, "Signup failed").await?;
        self.establish(response).await
    }

    /// `POST /logout`. Does not touch the vault; see
    /// [`SessionStore::end_session`](crate::auth::SessionStore::end_session).
    pub async fn end_session(&self) -> Result<Message, ApiError> {
        self.mutate(Method::POST, &["logout"], "Logout failed").await
    }

    /// `GET /validate` with the stored token.
    pub async fn validate_session(&self) -> Result<Message, ApiError> {
        let response = Self::send(
            self.request(Method::GET, &["validate"])?,
            "Token validation failed",
        )
        .await?;
        Self::acknowledge(response).await
    }

    // ── Profiles ────────────────────────────────────────────────────

    /// `GET /dev/{username}`.
    pub async fn fetch_profile(&self, username: &str) -> Result<Profile, ApiError> {
        self.get(&["dev", username], "Failed to fetch user profile").await
    }

    /// `GET /dev/{username}/projects`.
    pub async fn fetch_projects(&self, username: &str) -> Result<Vec<Project>, ApiError> {
        let projects: Option<Vec<Project>> = self
            .get(&["dev", username, "projects"], "Failed to fetch user projects")
            .await?;
        Ok(projects.unwrap_or_default())
    }

    /// `GET /dev/{username}/{code}`.
    pub async fn fetch_project_detail(&self, username: &str, code: &str) -> Result<Project, ApiError> {
        self.get(&["dev", username, code], "Failed to fetch project detail")
            .await
    }

    /// `PUT /profile/update` (multipart). Returns the updated user.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<User, ApiError> {
        let form = update.into_form()?;
        let builder = self
            .request(Method::PUT, &["profile", "update"])?
            .multipart(form);
        let response = Self::send(builder, "Failed to update profile").await?;
        Self::decode(response).await
    }

    // ── Follows ─────────────────────────────────────────────────────

    /// `POST /users/{username}/follow`.
    pub async fn follow(&self, username: &str) -> Result<Message, ApiError> {
        self.mutate(Method::POST, &["users", username, "follow"], "Failed to follow user")
            .await
    }

    /// `DELETE /users/{username}/unfollow`.
    pub async fn unfollow(&self, username: &str) -> Result<Message, ApiError> {
        self.mutate(Method::DELETE, &["users", username, "unfollow"], "Failed to unfollow user")
            .await
    }

    /// `GET /users/{username}/follow/status`.
    pub async fn fetch_follow_status(&self, username: &str) -> Result<FollowStatus, ApiError> {
        self.get(
            &["users", username, "follow", "status"],
            "Failed to check follow status",
        )
        .await
    }

    // ── Projects ────────────────────────────────────────────────────

    /// `GET /projects`.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let projects: Option<Vec<Project>> =
            self.get(&["projects"], "Failed to fetch projects").await?;
        Ok(projects.unwrap_or_default())
    }

    /// `POST /projects/create`.
    pub async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        project.validate()?;
        let builder = self
            .request(Method::POST, &["projects", "create"])?
            .json(project);
        let response = Self::send(builder, "Failed to create project").await?;
        Self::decode(response).await
    }

    /// `GET /projects/saved`.
    pub async fn list_saved_projects(&self) -> Result<Vec<Project>, ApiError> {
        let projects: Option<Vec<Project>> = self
            .get(&["projects", "saved"], "Failed to fetch saved projects")
            .await?;
        Ok(projects.unwrap_or_default())
    }

    /// `POST /projects/{id}/save`.
    pub async fn save_project(&self, id: i64) -> Result<Message, ApiError> {
        let id = id.to_string();
        self.mutate(Method::POST, &["projects", &id, "save"], "Failed to save project")
            .await
    }

    /// `DELETE /projects/{id}/save`.
    pub async fn unsave_project(&self, id: i64) -> Result<Message, ApiError> {
        let id = id.to_string();
        self.mutate(Method::DELETE, &["projects", &id, "save"], "Failed to unsave project")
            .await
    }
}
