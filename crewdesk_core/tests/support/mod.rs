use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::{json, Value};

use crewdesk_core::api::ApiClient;
use crewdesk_core::fetch::FetchJson;

pub const BASE_URL: &str = "https://api.test";

/// Canned-response transport that records every requested path, in
/// order. Paths with no canned body fail like a dead connection.
pub struct StubFetcher {
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_string(), body);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl FetchJson for StubFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        let path = url.strip_prefix(BASE_URL).unwrap_or(url).to_string();
        self.requests.lock().expect("requests lock").push(path.clone());
        match self.responses.get(&path) {
            Some(body) => Ok(body.clone()),
            None => Err(anyhow!("no route for {path}")),
        }
    }
}

pub fn client(stub: Arc<StubFetcher>) -> ApiClient {
    ApiClient::with_fetcher(BASE_URL, stub).expect("stub client")
}

pub fn user_json(id: u64, name: &str, company: &str, catch_phrase: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "company": { "name": company, "catchPhrase": catch_phrase }
    })
}

pub fn post_json(id: u64, user_id: u64, title: &str, body: &str) -> Value {
    json!({ "id": id, "userId": user_id, "title": title, "body": body })
}

pub fn comment_json(id: u64, post_id: u64, name: &str, email: &str, body: &str) -> Value {
    json!({
        "id": id,
        "postId": post_id,
        "name": name,
        "email": email,
        "body": body
    })
}

fn leanne() -> Value {
    user_json(
        1,
        "Leanne Graham",
        "Romaguera-Crona",
        "Multi-layered client-server neural-net",
    )
}

fn ervin() -> Value {
    user_json(2, "Ervin Howell", "Deckow-Crist", "Proactive didactic contingency")
}

/// Two employees; employee 1 owns posts 10 and 20, employee 2 owns
/// post 30. Post 20 has no comments.
pub fn seeded_stub() -> StubFetcher {
    StubFetcher::new()
        .respond("/users", json!([leanne(), ervin()]))
        .respond("/users/1", leanne())
        .respond("/users/2", ervin())
        .respond(
            "/posts?userId=1",
            json!([
                post_json(10, 1, "sunt aut facere", "quia et suscipit"),
                post_json(20, 1, "qui est esse", "est rerum tempore"),
            ]),
        )
        .respond(
            "/posts?userId=2",
            json!([post_json(30, 2, "ea molestias quasi", "et iusto sed quo")]),
        )
        .respond(
            "/posts/10/comments",
            json!([
                comment_json(1, 10, "id labore ex", "Eliseo@gardner.biz", "laudantium enim"),
                comment_json(2, 10, "quo vero", "Jayne_Kuhic@sydney.com", "est natus enim"),
            ]),
        )
        .respond("/posts/20/comments", json!([]))
        .respond(
            "/posts/30/comments",
            json!([comment_json(3, 30, "odio adipisci", "Nikita@garfield.biz", "quia molestiae")]),
        )
}
