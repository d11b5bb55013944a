#![allow(dead_code)]

use std::sync::Arc;

use chatline::ui::MemorySurface;
use chatline::{ApiRevision, ChatSession, HttpMessageApi, IdentityContext, SessionOptions, UserId};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Identity of the user driving the session under test.
pub const MY_ID: i64 = 9;

pub fn session_for(server: &MockServer) -> (ChatSession, Arc<MemorySurface>) {
    session_with_revision(&server.uri(), ApiRevision::Current)
}

pub fn session_with_revision(
    base_url: &str,
    revision: ApiRevision,
) -> (ChatSession, Arc<MemorySurface>) {
    let api = HttpMessageApi::new(base_url, revision).expect("mock server uri parses");
    let surface = Arc::new(MemorySurface::new());
    let session = ChatSession::new(
        Arc::new(api),
        IdentityContext::new(UserId::from(MY_ID)),
        surface.clone(),
        SessionOptions::default(),
    );
    (session, surface)
}

pub async fn mount_history(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

pub fn history_json(records: &[(u32, &str, i64)]) -> String {
    let messages: Vec<_> = records
        .iter()
        .map(|(id, content, author)| {
            serde_json::json!({
                "id": id,
                "content": content,
                "type": "text",
                "user_id": author,
                "timestamp": format!("2025-05-01T10:00:{id:02}Z"),
            })
        })
        .collect();
    serde_json::json!({
        "status": "success",
        "count": messages.len(),
        "messages": messages,
    })
    .to_string()
}
