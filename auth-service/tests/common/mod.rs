use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;
use std::time::Duration;

use auth_core::PasswordVerifier;
use auth_service::domain::auth::service::AuthService;
use auth_service::domain::token::service::TokenService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::directory::HttpUserDirectory;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::Json;
use axum::Router;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// Signing secret shared by the spawned service and token-crafting tests.
pub const JWT_SECRET: &str = "integration-test-secret-key-at-least-32-bytes";

/// Test application that spawns the real service against a stub directory
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    users: DirectoryState,
}

/// User document as the stub directory serves it over the wire
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

type DirectoryState = Arc<RwLock<HashMap<String, DirectoryUser>>>;

impl TestApp {
    /// Spawn the application and a stub user-directory server, both on
    /// random ports, and return TestApp
    pub async fn spawn() -> Self {
        let users: DirectoryState = Arc::new(RwLock::new(HashMap::new()));
        let directory_address = spawn_directory_stub(Arc::clone(&users)).await;
        Self::spawn_with_directory(users, &directory_address).await
    }

    /// Spawn the application wired to a directory address nothing listens on
    pub async fn spawn_with_unreachable_directory() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let unreachable = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let users: DirectoryState = Arc::new(RwLock::new(HashMap::new()));
        Self::spawn_with_directory(users, &unreachable).await
    }

    async fn spawn_with_directory(users: DirectoryState, directory_address: &str) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let directory = HttpUserDirectory::new(directory_address, Duration::from_secs(2))
            .expect("Failed to create directory client");
        let token_service = TokenService::new(
            JWT_SECRET.as_bytes(),
            chrono::Duration::hours(24),
            chrono::Duration::hours(24),
        );
        let auth_service = Arc::new(AuthService::new(Arc::new(directory), token_service));
        let application = create_router(auth_service);

        tokio::spawn(async move { axum::serve(listener, application).await });

        Self {
            address,
            api_client: reqwest::Client::new(),
            users,
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Insert a user into the stub directory with a real Argon2 hash;
    /// returns the generated user id
    pub fn seed_user(&self, email: &str, password: &str, is_active: bool) -> String {
        let id = Uuid::new_v4().to_string();
        let password_hash = PasswordVerifier::new()
            .hash(password)
            .expect("Failed to hash password");
        let now = Utc::now();

        let user = DirectoryUser {
            id: id.clone(),
            email: email.to_string(),
            password: password_hash,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            is_active,
            created_at: now,
            updated_at: now,
        };

        self.users
            .write()
            .expect("Directory state poisoned")
            .insert(id.clone(), user);
        id
    }

    pub fn deactivate_user(&self, id: &str) {
        if let Some(user) = self
            .users
            .write()
            .expect("Directory state poisoned")
            .get_mut(id)
        {
            user.is_active = false;
        }
    }

    pub fn remove_user(&self, id: &str) {
        self.users
            .write()
            .expect("Directory state poisoned")
            .remove(id);
    }
}

async fn spawn_directory_stub(users: DirectoryState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let address = format!("http://{}", listener.local_addr().unwrap());

    let router = Router::new()
        .route("/api/v1/users/email/:email", get(get_user_by_email))
        .route("/api/v1/users/:id", get(get_user_by_id))
        .with_state(users);

    tokio::spawn(async move { axum::serve(listener, router).await });

    address
}

async fn get_user_by_email(
    State(users): State<DirectoryState>,
    Path(email): Path<String>,
) -> Response {
    let users = users.read().expect("Directory state poisoned");
    match users.values().find(|user| user.email == email) {
        Some(user) => (StatusCode::OK, Json(user.clone())).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn get_user_by_id(State(users): State<DirectoryState>, Path(id): Path<String>) -> Response {
    let users = users.read().expect("Directory state poisoned");
    match users.get(&id) {
        Some(user) => (StatusCode::OK, Json(user.clone())).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
