use std::sync::Arc;

use anyhow::{Context, Result};
use log::warn;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::fetch::{FetchJson, HttpFetcher};
use crate::models::{Comment, Post, PostId, User, UserId};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Read-only client for the users/posts/comments API.
///
/// Accessors taking an id receive it as an `Option` and return `None`
/// without issuing a request when it is absent. Transport and parse
/// failures also collapse to `None`; callers branch on presence and
/// degrade instead of propagating errors.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    fetcher: Arc<dyn FetchJson>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let fetcher = HttpFetcher::new()?;
        Self::with_fetcher(base_url, Arc::new(fetcher))
    }

    /// Builds a client over a caller-supplied transport.
    pub fn with_fetcher(base_url: impl Into<String>, fetcher: Arc<dyn FetchJson>) -> Result<Self> {
        let base = sanitize_base_url(base_url.into())?;
        Ok(Self {
            base_url: base,
            fetcher,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> Result<()> {
        self.base_url = sanitize_base_url(base_url.into())?;
        Ok(())
    }

    /// `GET /users`: every employee, in server order.
    pub async fn get_users(&self) -> Option<Vec<User>> {
        self.get_json("/users").await
    }

    /// `GET /users/{id}`: one employee record.
    pub async fn get_user(&self, user_id: Option<UserId>) -> Option<User> {
        let user_id = user_id?;
        self.get_json(&format!("/users/{user_id}")).await
    }

    /// `GET /posts?userId={id}`: the employee's posts, in server order.
    pub async fn get_user_posts(&self, user_id: Option<UserId>) -> Option<Vec<Post>> {
        let user_id = user_id?;
        self.get_json(&format!("/posts?userId={user_id}")).await
    }

    /// `GET /posts/{id}/comments`: the post's comment thread.
    pub async fn get_post_comments(&self, post_id: Option<PostId>) -> Option<Vec<Comment>> {
        let post_id = post_id?;
        self.get_json(&format!("/posts/{post_id}/comments")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let url = format!("{}{}", self.base_url, path);
        let value = match self.fetcher.fetch_json(&url).await {
            Ok(value) => value,
            Err(err) => {
                warn!("GET {path} failed: {err:#}");
                return None;
            }
        };
        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!("GET {path} returned an unexpected body: {err}");
                None
            }
        }
    }
}

fn sanitize_base_url(mut base: String) -> Result<String> {
    if !base.starts_with("http://") && !base.starts_with("https://") {
        base = format!("https://{base}");
    }
    // Remove trailing slash for consistency
    while base.ends_with('/') {
        base.pop();
    }
    // Validate once
    let _ = Url::parse(&base).context("invalid base URL")?;
    Ok(base)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::anyhow;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    struct StubFetcher {
        payload: Option<Value>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl FetchJson for StubFetcher {
        async fn fetch_json(&self, _url: &str) -> Result<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.payload {
                Some(value) => Ok(value.clone()),
                None => Err(anyhow!("connection refused")),
            }
        }
    }

    fn client_with(payload: Option<Value>) -> (ApiClient, Arc<StubFetcher>) {
        let stub = Arc::new(StubFetcher {
            payload,
            calls: AtomicUsize::new(0),
        });
        let client = ApiClient::with_fetcher("https://api.test", stub.clone())
            .expect("stub client");
        (client, stub)
    }

    #[tokio::test]
    async fn missing_input_returns_none_without_a_request() {
        let (client, stub) = client_with(Some(json!([])));

        assert_eq!(client.get_user(None).await, None);
        assert_eq!(client.get_user_posts(None).await, None);
        assert_eq!(client.get_post_comments(None).await, None);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn transport_failure_returns_none() {
        let (client, stub) = client_with(None);

        assert_eq!(client.get_users().await, None);
        assert_eq!(client.get_user(Some(1)).await, None);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn unexpected_body_returns_none() {
        let (client, _stub) = client_with(Some(json!({ "error": "not found" })));

        assert_eq!(client.get_users().await, None);
    }

    #[tokio::test]
    async fn fetched_collections_parse_in_order() {
        let (client, _stub) = client_with(Some(json!([
            {
                "userId": 1,
                "id": 4,
                "title": "eum et est occaecati",
                "body": "ullam et saepe"
            },
            {
                "userId": 1,
                "id": 5,
                "title": "nesciunt quas odio",
                "body": "repudiandae veniam"
            }
        ])));

        let posts = client.get_user_posts(Some(1)).await.expect("posts");
        let ids: Vec<u64> = posts.iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn base_url_is_sanitized() {
        let (mut client, _stub) = client_with(None);
        assert_eq!(client.base_url(), "https://api.test");

        client.set_base_url("api.test/").expect("bare host");
        assert_eq!(client.base_url(), "https://api.test");

        client.set_base_url("http://api.test//").expect("http host");
        assert_eq!(client.base_url(), "http://api.test");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let (mut client, _stub) = client_with(None);
        assert!(client.set_base_url("https://").is_err());
        assert_eq!(client.base_url(), "https://api.test");
    }
}
