use crate::backend::{MY_ID, history_json, mount_history, session_for, session_with_revision};
use chatline::client::{SEND_LABEL, Side};
use chatline::error::GENERIC_NETWORK_ERROR;
use chatline::{ApiRevision, ClientError, MessageId, MessageType, UserId};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_receipt(server: &MockServer, body: &str) {
    Mock::given(method("POST"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn accepted_message_is_appended_as_mine() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/messages"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("type=text&message-content=Hi"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"status":"success","message_id":5}"#),
        )
        .expect(1)
        .mount(&server)
        .await;
    let (session, surface) = session_for(&server);

    let message = session.submit("text", "Hi").await.unwrap();

    assert_eq!(message.id(), &MessageId::assigned("5"));
    assert_eq!(message.author_id(), &UserId::from(MY_ID));
    assert_eq!(message.kind(), &MessageType::Text);

    let view = session.view();
    assert_eq!(view.blocks.len(), 1);
    assert_eq!(view.blocks[0].side, Side::Mine);
    assert_eq!(view.blocks[0].text(), "Hi");
    assert!(surface.banner_texts().is_empty());
    assert!(!session.is_busy());
}

#[tokio::test]
async fn empty_content_never_reaches_the_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (session, surface) = session_for(&server);

    let err = session.submit("text", "   ").await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(surface.banner_texts().len(), 1);
    assert!(session.conversation().is_empty());
    assert!(!session.is_busy());
}

#[tokio::test]
async fn missing_type_never_reaches_the_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (session, surface) = session_for(&server);

    assert!(session.submit("", "hello").await.unwrap_err().is_validation());
    assert_eq!(surface.banner_texts(), ["message type is missing"]);
}

#[tokio::test]
async fn server_error_keeps_conversation_and_reenables_send() {
    let server = MockServer::start().await;
    mount_history(&server, &history_json(&[(1, "earlier", 2)])).await;
    Mock::given(method("POST"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .mount(&server)
        .await;
    let (session, surface) = session_for(&server);
    session.load().await.unwrap();
    session.set_draft("Hi");

    let err = session.submit_draft().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(surface.banner_texts(), ["server error"]);
    let view = session.view();
    assert_eq!(view.blocks.len(), 1);
    assert_eq!(view.blocks[0].text(), "earlier");
    assert!(view.control.enabled);
    assert_eq!(view.control.label, SEND_LABEL);
    assert_eq!(session.draft().content(), "Hi");
}

#[tokio::test]
async fn unreadable_receipt_is_a_failure() {
    let server = MockServer::start().await;
    mount_receipt(&server, "<html>oops</html>").await;
    let (session, surface) = session_for(&server);

    let err = session.submit("text", "Hi").await.unwrap_err();

    assert!(matches!(err, ClientError::Format(_)));
    assert_eq!(surface.banner_texts(), [GENERIC_NETWORK_ERROR]);
    assert!(session.conversation().is_empty());
    assert!(!session.is_busy());
}

#[tokio::test]
async fn receipt_without_id_appends_pending_message() {
    let server = MockServer::start().await;
    mount_receipt(&server, r#"{"status":"success"}"#).await;
    let (session, _) = session_for(&server);

    let message = session.submit("text", "Hi").await.unwrap();

    assert!(!message.id().is_assigned());
    assert_eq!(session.conversation().len(), 1);
}

#[tokio::test]
async fn sequential_submits_append_in_order() {
    let server = MockServer::start().await;
    mount_receipt(&server, r#"{"message_id":7}"#).await;
    let (session, _) = session_for(&server);

    session.submit("text", "first").await.unwrap();
    session.submit("image", "second").await.unwrap();

    let texts: Vec<_> = session
        .conversation()
        .iter()
        .map(|m| m.content().to_string())
        .collect();
    assert_eq!(texts, ["first", "second"]);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn successful_submit_clears_the_draft() {
    let server = MockServer::start().await;
    mount_receipt(&server, r#"{"message_id":1}"#).await;
    let (session, _) = session_for(&server);
    session.set_kind("file");
    session.set_draft("report.pdf");

    let message = session.submit_draft().await.unwrap();

    assert_eq!(message.kind(), &MessageType::File);
    assert_eq!(session.draft().content(), "");
    assert_eq!(session.draft().kind(), "file");
}

#[tokio::test]
async fn legacy_backend_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_string("type=text&content=Hi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Message sent with ID: 12"))
        .expect(1)
        .mount(&server)
        .await;
    let (session, _) = session_with_revision(&server.uri(), ApiRevision::Legacy);

    let message = session.submit("text", "Hi").await.unwrap();

    assert_eq!(message.id(), &MessageId::assigned("12"));
}
