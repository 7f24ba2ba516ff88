use anyhow::{Context, Result};
use log::info;
use thiserror::Error;

use crate::client::RequestError;
use crate::types::user::{AuthResponse, LoginRequest, SignupRequest, User};

use super::Api;

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const ME_PATH: &str = "/auth/me";

/// Failure of login or signup: the request itself, or keeping the session it
/// returned.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("save session: {0:#}")]
    Session(anyhow::Error),
}

impl Api {
    /// Logs in and stores the token together with the user record.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let req = LoginRequest { email, password };
        let resp: AuthResponse = self.client.post(LOGIN_PATH, Some(&req)).await?;
        self.save_session(resp)
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let req = SignupRequest {
            name,
            email,
            password,
        };
        let resp: AuthResponse = self.client.post(SIGNUP_PATH, Some(&req)).await?;
        self.save_session(resp)
    }

    /// Forgets the local session. The server is not told.
    pub fn logout(&self) -> Result<()> {
        self.session().clear().context("clear session")?;
        info!("Logged out");
        Ok(())
    }

    /// The user as the server sees it now, the cached record is not touched.
    pub async fn me(&self) -> Result<User, RequestError> {
        self.client.get(ME_PATH).await
    }

    fn save_session(&self, resp: AuthResponse) -> Result<User, AuthError> {
        self.session().save(&resp).map_err(AuthError::Session)?;
        info!("Logged in as '{}'", resp.user.email);
        Ok(resp.user)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Method;
    use serde_json::{json, Value};

    use super::AuthError;
    use crate::api::testing::{api, logged_in, FakeServer};
    use crate::client::RequestError;
    use crate::session::{KeyValueStore, Session};

    const AUTH_BODY: &str =
        r#"{"token":"fresh","user":{"id":3,"name":"Sam","email":"sam@example.com"}}"#;

    #[tokio::test]
    async fn test_login_saves_session() {
        let session = Session::in_memory();
        let (api, server) = api(
            FakeServer::new().route(Method::POST, "/auth/login", 200, AUTH_BODY),
            session.clone(),
        );

        let user = api.login("sam@example.com", "pw").await.unwrap();
        assert_eq!(user.name, "Sam");
        assert_eq!(session.token().as_deref(), Some("fresh"));
        assert_eq!(session.user(), Some(user));

        let seen = server.seen();
        let body: Value = serde_json::from_str(seen[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"email": "sam@example.com", "password": "pw"}));
    }

    #[tokio::test]
    async fn test_signup_saves_session() {
        let session = Session::in_memory();
        let (api, server) = api(
            FakeServer::new().route(Method::POST, "/auth/signup", 200, AUTH_BODY),
            session.clone(),
        );

        api.signup("Sam", "sam@example.com", "pw").await.unwrap();
        assert!(session.is_logged_in());

        let body: Value =
            serde_json::from_str(server.seen()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Sam");
    }

    #[tokio::test]
    async fn test_login_failure_keeps_session_empty() {
        let session = Session::in_memory();
        let (api, _) = api(
            FakeServer::new().route(
                Method::POST,
                "/auth/login",
                400,
                r#"{"error":"Invalid email or password"}"#,
            ),
            session.clone(),
        );

        let err = api.login("sam@example.com", "bad").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
        match err {
            AuthError::Request(err) => assert_eq!(err.status(), Some(400)),
            AuthError::Session(err) => panic!("unexpected session error: {err:#}"),
        }
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn test_login_response_without_token() {
        let session = Session::in_memory();
        let (api, _) = api(
            FakeServer::new().route(
                Method::POST,
                "/auth/login",
                200,
                r#"{"user":{"name":"Sam","email":"sam@example.com"}}"#,
            ),
            session.clone(),
        );

        let err = api.login("sam@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, AuthError::Request(RequestError::Schema(_))));
        assert!(session.user().is_none());
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("store is read only, cannot set '{key}'")
        }

        fn remove(&self, _key: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_login_session_not_saved() {
        let (api, _) = api(
            FakeServer::new().route(Method::POST, "/auth/login", 200, AUTH_BODY),
            Session::new(Arc::new(ReadOnlyStore)),
        );

        let err = api.login("sam@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, AuthError::Session(_)));
        assert!(err.to_string().contains("read only"));
    }

    #[tokio::test]
    async fn test_logout_clears_both() {
        let session = logged_in();
        let (api, server) = api(FakeServer::new(), session.clone());

        api.logout().unwrap();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert!(server.seen().is_empty());
    }

    #[tokio::test]
    async fn test_me() {
        let (api, server) = api(
            FakeServer::new().route(
                Method::GET,
                "/auth/me",
                200,
                r#"{"name":"Alex Renamed","email":"alex@example.com"}"#,
            ),
            logged_in(),
        );

        let user = api.me().await.unwrap();
        assert_eq!(user.name, "Alex Renamed");
        assert!(server.seen()[0].authorized);
        // The cache is only refreshed by logging in again.
        assert_eq!(api.session().user().unwrap().name, "Alex");
    }
}
