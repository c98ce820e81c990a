// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Minimal GitHub REST client: existence check and repository creation.

use std::sync::OnceLock;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::types::HostingConfig;
use crate::error::{HostingError, MirrorResult, NetworkError};

/// Shared HTTP client with the crate user agent.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(user_agent())
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

fn user_agent() -> String {
    format!("oran-mirror/{}", env!("CARGO_PKG_VERSION"))
}

/// Body of `POST /user/repos`.
#[derive(Debug, Serialize)]
struct CreateRepo<'a> {
    name: &'a str,
    private: bool,
}

/// How [`HostingClient::create`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// 201.
    Created,
    /// 422; the name is already taken on the account.
    AlreadyExists,
}

/// Authenticated client for one account.
#[derive(Debug, Clone)]
pub struct HostingClient {
    api_url: String,
    web_url: String,
    username: String,
    token: String,
}

impl HostingClient {
    pub fn new(
        api_url: impl Into<String>,
        web_url: impl Into<String>,
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            web_url: web_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            token: token.into(),
        }
    }

    #[must_use]
    pub fn from_config(hosting: &HostingConfig) -> Self {
        Self::new(
            &hosting.api_url,
            &hosting.web_url,
            &hosting.username,
            &hosting.token,
        )
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Clone URL of `name` under this account.
    #[must_use]
    pub fn repo_url(&self, name: &str) -> String {
        format!("{}/{}/{name}.git", self.web_url, self.username)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", user_agent())
    }

    /// `GET /repos/{user}/{name}`; only a 200 counts as existing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn repo_exists(&self, name: &str) -> MirrorResult<bool> {
        let url = format!("{}/repos/{}/{name}", self.api_url, self.username);
        debug!(url = %url, "checking repository");

        let response = self
            .authorized(global_client().get(&url))
            .send()
            .await
            .map_err(NetworkError::from)?;

        let status = response.status();
        debug!(status = status.as_u16(), "repository lookup answered");
        Ok(status == StatusCode::OK)
    }

    /// `POST /user/repos`.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::CreateRejected`] for any status other than
    /// 201 or 422, and a network error if the request cannot be sent.
    pub async fn create(&self, name: &str, private: bool) -> MirrorResult<CreateOutcome> {
        let url = format!("{}/user/repos", self.api_url);

        let response = self
            .authorized(global_client().post(&url))
            .json(&CreateRepo { name, private })
            .send()
            .await
            .map_err(NetworkError::from)?;

        match response.status() {
            StatusCode::CREATED => {
                info!(repo = %name, "Repository created");
                Ok(CreateOutcome::Created)
            }
            StatusCode::UNPROCESSABLE_ENTITY => {
                warn!(repo = %name, "Repository already exists");
                Ok(CreateOutcome::AlreadyExists)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(HostingError::CreateRejected {
                    name: name.to_string(),
                    status: status.as_u16(),
                    body,
                }
                .into())
            }
        }
    }

    /// Make sure `name` exists and return its clone URL.
    ///
    /// Creation is only attempted when the lookup does not answer 200.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::repo_exists`] and [`Self::create`].
    pub async fn provision(&self, name: &str, private: bool) -> MirrorResult<String> {
        if self.repo_exists(name).await? {
            info!(repo = %name, "Repository already exists");
        } else {
            self.create(name, private).await?;
        }
        Ok(self.repo_url(name))
    }
}
