use crate::backend::{history_json, mount_history, session_for};
use chatline::client::Side;
use chatline::error::GENERIC_NETWORK_ERROR;
use chatline::{ClientError, TransportError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn history_from_another_user_renders_as_theirs() {
    let server = MockServer::start().await;
    mount_history(&server, &history_json(&[(1, "Hello", 2)])).await;
    let (session, _) = session_for(&server);

    let conversation = session.load().await.unwrap();

    assert_eq!(conversation.len(), 1);
    let view = session.view();
    assert_eq!(view.blocks.len(), 1);
    assert_eq!(view.blocks[0].side, Side::Theirs);
    assert_eq!(view.blocks[0].text(), "Hello");
    assert!(view.banners.is_empty());
}

#[tokio::test]
async fn history_keeps_server_order() {
    let server = MockServer::start().await;
    mount_history(
        &server,
        &history_json(&[(1, "one", 2), (2, "two", 9), (3, "three", 4)]),
    )
    .await;
    let (session, _) = session_for(&server);

    session.load().await.unwrap();

    let view = session.view();
    let texts: Vec<_> = view.blocks.iter().map(|b| b.text().to_string()).collect();
    assert_eq!(texts, ["one", "two", "three"]);
    let sides: Vec<_> = view.blocks.iter().map(|b| b.side).collect();
    assert_eq!(sides, [Side::Theirs, Side::Mine, Side::Theirs]);
}

#[tokio::test]
async fn empty_history_renders_nothing() {
    let server = MockServer::start().await;
    mount_history(&server, r#"{"status":"success","count":0,"messages":[]}"#).await;
    let (session, _) = session_for(&server);

    let conversation = session.load().await.unwrap();
    assert!(conversation.is_empty());
    assert!(session.view().blocks.is_empty());
}

#[tokio::test]
async fn failed_reload_keeps_what_was_rendered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string(history_json(&[(1, "kept", 2)])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Failed to retrieve messages"))
        .mount(&server)
        .await;
    let (session, surface) = session_for(&server);

    session.load().await.unwrap();
    let err = session.load().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Transport(TransportError::Status { status: 500, .. })
    ));
    let view = session.view();
    assert_eq!(view.blocks.len(), 1);
    assert_eq!(view.blocks[0].text(), "kept");
    assert_eq!(surface.banner_texts(), ["Failed to retrieve messages"]);
}

#[tokio::test]
async fn malformed_history_shows_generic_banner() {
    let server = MockServer::start().await;
    mount_history(&server, "<html>not json</html>").await;
    let (session, surface) = session_for(&server);

    let err = session.load().await.unwrap_err();

    assert!(matches!(err, ClientError::Format(_)));
    assert!(session.conversation().is_empty());
    assert_eq!(surface.banner_texts(), [GENERIC_NETWORK_ERROR]);
}

#[tokio::test]
async fn one_bad_record_rejects_the_whole_history() {
    let server = MockServer::start().await;
    mount_history(
        &server,
        r#"{"messages":[
            {"id":1,"content":"fine","type":"text","user_id":2,"timestamp":"T"},
            {"id":2,"content":"","type":"text","user_id":2,"timestamp":"T"}
        ]}"#,
    )
    .await;
    let (session, _) = session_for(&server);

    assert!(matches!(
        session.load().await,
        Err(ClientError::Format(_))
    ));
    assert!(session.conversation().is_empty());
}

#[tokio::test]
async fn unreachable_backend_shows_generic_banner() {
    let server = MockServer::start().await;
    let (session, surface) = session_for(&server);
    drop(server);

    let err = session.load().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Transport(TransportError::Network(_))
    ));
    assert_eq!(surface.banner_texts(), [GENERIC_NETWORK_ERROR]);
}

#[tokio::test]
async fn records_without_author_render_as_theirs() {
    let server = MockServer::start().await;
    mount_history(
        &server,
        r#"{"status":"success","count":2,"messages":[
            {"id":1,"content":"Hello","type":1},
            {"id":2,"content":"Hi","type":1}
        ]}"#,
    )
    .await;
    let (session, surface) = session_for(&server);

    let conversation = session.load().await.unwrap();

    assert_eq!(conversation.len(), 2);
    let view = session.view();
    let sides: Vec<_> = view.blocks.iter().map(|b| b.side).collect();
    assert_eq!(sides, [Side::Theirs, Side::Theirs]);
    assert_eq!(view.blocks[1].text(), "Hi");
    assert!(surface.banner_texts().is_empty());
}
