//! Polling a real HTTP `/data` endpoint.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;

use posture_watch::{
    Card, DashboardState, Document, HttpSource, PollError, Poller, SnapshotSource, StatusClass,
    ViewBindings,
};

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn source(addr: SocketAddr) -> HttpSource {
    HttpSource::new(&format!("http://{}", addr), "/data", Some(Duration::from_secs(5))).unwrap()
}

fn dashboard(addr: SocketAddr) -> (Arc<Document>, Poller) {
    let document = Arc::new(Document::dashboard());
    let poller = Poller::new(Box::new(source(addr)), ViewBindings::resolve(&document));
    (document, poller)
}

#[tokio::test]
async fn test_end_to_end_snapshot() {
    let router = Router::new().route(
        "/data",
        get(|| async {
            Json(json!({
                "posture": "Good",
                "tilt": "Warning",
                "distance": "Good",
                "blink": 3
            }))
        }),
    );
    let addr = serve(router).await;
    let (document, mut poller) = dashboard(addr);

    poller.poll_once().await.unwrap();

    let state = DashboardState::read(&document);
    assert_eq!(state.card(Card::Posture).unwrap().class, Some(StatusClass::Good));
    assert_eq!(state.card(Card::Tilt).unwrap().class, Some(StatusClass::Bad));
    assert_eq!(state.card(Card::Distance).unwrap().class, Some(StatusClass::Good));
    assert_eq!(state.blink.as_deref(), Some("3"));

    let tilt_card = document.element("tilt-card").unwrap();
    assert!(tilt_card.has_class("status-bad"));
    assert!(!tilt_card.has_class("status-good"));
    assert!(!tilt_card.has_class("status-warn"));
}

#[tokio::test]
async fn test_monitor_shaped_response() {
    // The posture monitor sends the blink count as a string and may report "Unknown".
    let router = Router::new().route(
        "/data",
        get(|| async {
            Json(json!({
                "posture": "Unknown",
                "blink": "0",
                "tilt": "Good",
                "distance": "Unknown"
            }))
        }),
    );
    let addr = serve(router).await;
    let (document, mut poller) = dashboard(addr);

    poller.poll_once().await.unwrap();

    let state = DashboardState::read(&document);
    assert_eq!(state.card(Card::Posture).unwrap().class, None);
    assert_eq!(state.card(Card::Posture).unwrap().text.as_deref(), Some("Unknown"));
    assert_eq!(state.card(Card::Tilt).unwrap().class, Some(StatusClass::Good));
    assert_eq!(state.blink.as_deref(), Some("0"));
}

/// Serves one good snapshot, then fails in the given way.
fn good_then(failure: fn() -> axum::response::Response) -> Router {
    use axum::response::IntoResponse;

    let calls = Arc::new(AtomicUsize::new(0));
    Router::new().route(
        "/data",
        get(move || {
            let calls = calls.clone();
            async move {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Json(json!({"posture": "Good", "tilt": "Good", "distance": "Warning", "blink": "7"}))
                        .into_response()
                } else {
                    failure()
                }
            }
        }),
    )
}

#[tokio::test]
async fn test_server_error_leaves_display_unchanged() {
    use axum::response::IntoResponse;

    let addr = serve(good_then(|| {
        (StatusCode::INTERNAL_SERVER_ERROR, "camera offline").into_response()
    }))
    .await;
    let (document, mut poller) = dashboard(addr);

    poller.poll_once().await.unwrap();
    let before = DashboardState::read(&document);

    let err = poller.poll_once().await.unwrap_err();
    assert_eq!(err, PollError::Status(500));
    assert_eq!(DashboardState::read(&document), before);
}

#[tokio::test]
async fn test_error_status_with_json_body_is_rejected() {
    use axum::response::IntoResponse;

    let addr = serve(good_then(|| {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"posture": "Warning"}))).into_response()
    }))
    .await;
    let (document, mut poller) = dashboard(addr);

    poller.poll_once().await.unwrap();
    assert!(poller.poll_once().await.is_err());

    assert_eq!(document.element("posture-status").unwrap().text(), "Good");
}

#[tokio::test]
async fn test_malformed_json_leaves_display_unchanged() {
    use axum::response::IntoResponse;

    let addr = serve(good_then(|| "<html>not json</html>".into_response())).await;
    let (document, mut poller) = dashboard(addr);

    poller.poll_once().await.unwrap();
    let before = DashboardState::read(&document);

    let err = poller.poll_once().await.unwrap_err();
    assert!(matches!(err, PollError::Parse(_)));
    assert_eq!(DashboardState::read(&document), before);

    let status = poller.status().borrow().clone();
    assert_eq!(status.failures, 1);
    assert!(status.has_data());
}

#[tokio::test]
async fn test_non_object_bodies_are_rejected() {
    use axum::response::IntoResponse;

    let bodies: [fn() -> axum::response::Response; 4] = [
        || Json(json!(["Warning", "Warning", "Warning", "9"])).into_response(),
        || Json(json!([])).into_response(),
        || Json(json!(42)).into_response(),
        || Json(json!(null)).into_response(),
    ];

    for body in bodies {
        let addr = serve(good_then(body)).await;
        let (document, mut poller) = dashboard(addr);

        poller.poll_once().await.unwrap();
        let before = DashboardState::read(&document);

        let err = poller.poll_once().await.unwrap_err();
        assert!(matches!(err, PollError::Parse(_)), "{:?}", err);
        assert_eq!(DashboardState::read(&document), before);
        assert!(document.element("posture-card").unwrap().has_class("status-good"));
        assert_eq!(document.element("blink-status").unwrap().text(), "7");
    }
}

#[tokio::test]
async fn test_missing_route_is_an_error() {
    let addr = serve(Router::new()).await;
    let mut source = source(addr);

    assert_eq!(source.fetch().await.unwrap_err(), PollError::Status(404));
}

#[tokio::test]
async fn test_spawned_poller_tracks_endpoint() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let router = Router::new().route(
        "/data",
        get(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Json(json!({"posture": "Good", "blink": n})) }
        }),
    );
    let addr = serve(router).await;
    let (document, poller) = dashboard(addr);

    let handle = poller.with_interval(Duration::from_millis(50)).spawn();
    let mut status = handle.status();
    for _ in 0..3 {
        status.changed().await.unwrap();
    }
    handle.stop().await.unwrap();

    let served = calls.load(Ordering::SeqCst);
    assert!(served >= 3);
    let blink: usize = document.element("blink-status").unwrap().text().parse().unwrap();
    assert!(blink >= 3 && blink <= served);
}
