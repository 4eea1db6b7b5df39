//! End-to-end tests for the client shell against a recording fake session.

use std::sync::Arc;
use std::time::Duration;

use chessview::{
    ChessClient, Element, Error, LiveContext, PushFuture, SessionError, SessionHandle,
    SessionState, registry,
};
use chessview_protocol::{ActionEvent, ActionKind};
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::time::timeout;
use url::Url;

/// Fake session that records every pushed event.
struct RecordingSession {
    events: mpsc::UnboundedSender<ActionEvent>,
}

impl SessionHandle for RecordingSession {
    fn push_event(&self, event: ActionEvent) -> PushFuture<'_> {
        let events = self.events.clone();
        Box::pin(async move {
            events
                .send(event)
                .map_err(|e| Error::Dispatch(e.to_string()))?;
            Ok(Value::Null)
        })
    }
}

fn recording_session() -> (
    Arc<dyn SessionHandle>,
    mpsc::UnboundedReceiver<ActionEvent>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Arc::new(RecordingSession { events: tx }), rx)
}

async fn expect_event(rx: &mut mpsc::UnboundedReceiver<ActionEvent>) -> ActionEvent {
    timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("a dispatch should arrive")
        .expect("event channel should stay open")
}

async fn expect_no_event(rx: &mut mpsc::UnboundedReceiver<ActionEvent>) {
    match timeout(Duration::from_millis(100), rx.recv()).await {
        Err(_) | Ok(None) => {}
        Ok(Some(event)) => panic!("unexpected dispatch: {event:?}"),
    }
}

fn attached_client() -> (
    ChessClient,
    Arc<dyn SessionHandle>,
    mpsc::UnboundedReceiver<ActionEvent>,
) {
    let client = ChessClient::with_default_server();
    let (session, rx) = recording_session();
    client.session_attached(&session);
    (client, session, rx)
}

#[tokio::test]
async fn valid_deep_link_dispatches_one_join() {
    let (client, _session, mut rx) = attached_client();

    client.open_url(&Url::parse("chessapp://ABC123").unwrap());

    let event = expect_event(&mut rx).await;
    assert_eq!(event.kind, ActionKind::Click);
    assert_eq!(event.event, "join");
    assert_eq!(event.value.get("id").map(String::as_str), Some("ABC123"));
    assert_eq!(event.value.len(), 1);

    // Exactly one dispatch per activation.
    expect_no_event(&mut rx).await;
}

#[tokio::test]
async fn deep_link_ignores_path_and_query() {
    let (client, _session, mut rx) = attached_client();

    client.open_url(&Url::parse("chessapp://game42/ignored/path?x=1").unwrap());

    let event = expect_event(&mut rx).await;
    assert_eq!(event.value.get("id").map(String::as_str), Some("game42"));
}

#[tokio::test]
async fn empty_host_dispatches_nothing() {
    let (client, _session, mut rx) = attached_client();

    client.open_url(&Url::parse("chessapp://").unwrap());

    expect_no_event(&mut rx).await;
}

#[tokio::test]
async fn concurrent_activations_stay_independent() {
    let (client, _session, mut rx) = attached_client();
    let client = Arc::new(client);

    let first = {
        let client = Arc::clone(&client);
        tokio::spawn(async move {
            client.open_url(&Url::parse("chessapp://gameone").unwrap());
        })
    };
    let second = {
        let client = Arc::clone(&client);
        tokio::spawn(async move {
            client.open_url(&Url::parse("chessapp://gametwo").unwrap());
        })
    };
    first.await.unwrap();
    second.await.unwrap();

    let mut ids = vec![
        expect_event(&mut rx).await.value["id"].clone(),
        expect_event(&mut rx).await.value["id"].clone(),
    ];
    ids.sort();
    assert_eq!(ids, vec!["gameone".to_string(), "gametwo".to_string()]);

    expect_no_event(&mut rx).await;
}

#[tokio::test]
async fn detached_client_drops_activations() {
    let (client, _session, mut rx) = attached_client();

    client.session_detached();
    client.open_url(&Url::parse("chessapp://game42").unwrap());

    expect_no_event(&mut rx).await;
}

#[tokio::test]
async fn dead_session_makes_dispatch_a_noop() {
    let (client, session, mut rx) = attached_client();
    drop(session);

    client.open_url(&Url::parse("chessapp://game42").unwrap());

    expect_no_event(&mut rx).await;
}

#[tokio::test]
async fn listener_tag_forwards_activations() {
    let client = ChessClient::with_default_server();
    let (session, mut rx) = recording_session();
    let context: LiveContext = client.session_attached(&session);

    let tag = registry::lookup(&Element::named("OpenGameListener"), &context).unwrap();
    let chessview::NativeTag::OpenGameListener(listener) = tag;

    listener.on_open_url(&Url::parse("chessapp://game42").unwrap());

    let event = expect_event(&mut rx).await;
    assert_eq!(event.event, "join");
    assert_eq!(event.value.get("id").map(String::as_str), Some("game42"));
}

#[tokio::test]
async fn lifecycle_states_drive_views_while_joining() {
    let (client, _session, mut rx) = attached_client();

    assert!(client.view_for_state(&SessionState::Connecting).is_some());
    assert!(client.view_for_state(&SessionState::Connected).is_none());

    client.open_url(&Url::parse("chessapp://game42").unwrap());
    expect_event(&mut rx).await;

    let error = SessionError::Protocol("unexpected frame".to_string());
    let fallback = client.on_unrecoverable_error(&error);
    assert_eq!(fallback, chessview::View::Progress(None));
}
