use std::time::Duration;

use anyhow::Error;
use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use reqwest::header;
use reqwest::StatusCode;
use reqwest::Url;
use serde::Deserialize;

use crate::domain::auth::errors::DirectoryError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::UserId;
use crate::domain::auth::models::UserRecord;
use crate::domain::auth::ports::UserDirectoryPort;

/// HTTP adapter for the user-directory service.
///
/// Every request is bounded by the client timeout; dropping the returned
/// future (request cancellation) aborts the in-flight call. Failures are
/// never retried at this layer.
pub struct HttpUserDirectory {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpUserDirectory {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        anyhow::ensure!(
            !base_url.cannot_be_a_base(),
            "directory base URL must be hierarchical: {}",
            base_url
        );

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    fn user_url(&self, segments: &[&str]) -> Result<Url, DirectoryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DirectoryError::Unavailable("invalid directory base URL".to_string()))?
            .extend(segments);
        Ok(url)
    }

    async fn fetch_user(&self, url: Url) -> Result<Option<UserRecord>, DirectoryError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            StatusCode::OK => {
                let body: UserResponseBody = response
                    .json()
                    .await
                    .map_err(|e| DirectoryError::InvalidBody(e.to_string()))?;
                body.try_into().map(Some)
            }
            status => Err(DirectoryError::UnexpectedStatus(status.as_u16())),
        }
    }
}

#[async_trait]
impl UserDirectoryPort for HttpUserDirectory {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserRecord>, DirectoryError> {
        let url = self.user_url(&["api", "v1", "users", "email", email.as_str()])?;
        self.fetch_user(url).await
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, DirectoryError> {
        let url = self.user_url(&["api", "v1", "users", &id.to_string()])?;
        self.fetch_user(url).await
    }
}

/// Wire shape of a user document as the directory serves it.
///
/// The stored one-way hash travels in the directory's `password` field.
#[derive(Debug, Deserialize)]
struct UserResponseBody {
    id: String,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserResponseBody> for UserRecord {
    type Error = DirectoryError;

    fn try_from(body: UserResponseBody) -> Result<Self, DirectoryError> {
        let id = UserId::from_string(&body.id)
            .map_err(|e| DirectoryError::InvalidBody(format!("invalid user id: {}", e)))?;
        let email = EmailAddress::new(body.email)
            .map_err(|e| DirectoryError::InvalidBody(format!("invalid email: {}", e)))?;

        Ok(UserRecord {
            id,
            email,
            password_hash: body.password,
            first_name: body.first_name,
            last_name: body.last_name,
            is_active: body.is_active,
            created_at: body.created_at,
            updated_at: body.updated_at,
        })
    }
}
