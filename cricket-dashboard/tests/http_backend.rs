// Integration tests for `HttpBackend` against a canned local HTTP responder.
//
// Each responder accepts one connection, captures the raw request, and
// answers with a fixed status and body.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use cricket_dashboard::api::{ApiError, HttpBackend, StatsBackend};
use cricket_dashboard::model::PredictionRequest;

// ===========================================================================
// Canned responder
// ===========================================================================

struct CapturedRequest {
    /// e.g. `GET /api/players?search=dhoni HTTP/1.1`
    request_line: String,
    body: String,
}

/// Serve one request, returning the backend base URL and a handle that
/// yields what the client sent.
async fn respond_once(status: &str, body: &str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];

        let header_end = loop {
            let n = socket.read(&mut buf).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        while raw.len() < header_end + content_length {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        CapturedRequest {
            request_line: head.lines().next().unwrap_or_default().to_string(),
            body: String::from_utf8_lossy(&raw[header_end..]).to_string(),
        }
    });

    (format!("http://{addr}/api"), handle)
}

// ===========================================================================
// Player search
// ===========================================================================

#[tokio::test]
async fn search_sends_encoded_query_and_keeps_order() {
    let (base, server) = respond_once(
        "200 OK",
        r#"[{"player_id": 21, "name": "MS Dhoni", "batting_style": "Right-hand bat"},
            {"player_id": 7, "name": "S Dhawan"}]"#,
    )
    .await;
    let backend = HttpBackend::new(&base).unwrap();

    let players = backend.search_players("ms dhoni").await.unwrap();
    let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["MS Dhoni", "S Dhawan"]);
    assert_eq!(players[0].id, 21);

    let captured = server.await.unwrap();
    assert!(
        captured.request_line.starts_with("GET /api/players?search=ms+dhoni ")
            || captured.request_line.starts_with("GET /api/players?search=ms%20dhoni "),
        "unexpected request line: {}",
        captured.request_line
    );
}

#[tokio::test]
async fn search_limit_is_appended_when_configured() {
    let (base, server) = respond_once("200 OK", "[]").await;
    let backend = HttpBackend::new(&base).unwrap().with_search_limit(Some(10));

    let players = backend.search_players("kohli").await.unwrap();
    assert!(players.is_empty());

    let captured = server.await.unwrap();
    assert!(
        captured
            .request_line
            .starts_with("GET /api/players?search=kohli&limit=10 "),
        "unexpected request line: {}",
        captured.request_line
    );
}

#[tokio::test]
async fn error_status_is_reported_as_status() {
    let (base, server) = respond_once("500 Internal Server Error", r#"{"detail": "boom"}"#).await;
    let backend = HttpBackend::new(&base).unwrap();

    match backend.search_players("rohit").await {
        Err(ApiError::Status { status }) => assert_eq!(status, 500),
        other => panic!("expected Status error, got {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let (base, server) = respond_once("200 OK", "<html>gateway</html>").await;
    let backend = HttpBackend::new(&base).unwrap();

    assert!(matches!(
        backend.search_players("rohit").await,
        Err(ApiError::Decode(_))
    ));
    server.await.unwrap();
}

#[tokio::test]
async fn closed_port_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(&format!("http://{addr}/api")).unwrap();
    assert!(matches!(
        backend.search_players("rohit").await,
        Err(ApiError::Transport(_))
    ));
}

// ===========================================================================
// Player stats
// ===========================================================================

#[tokio::test]
async fn stats_fetch_hits_player_path_and_reads_avg_fallback() {
    let (base, server) = respond_once(
        "200 OK",
        r#"{"matches": 120, "runs": 3400, "avg": 30.0, "strike_rate": 128.5,
            "hundreds": 1, "fifties": 20}"#,
    )
    .await;
    let backend = HttpBackend::new(&base).unwrap();

    let stats = backend.player_stats(45).await.unwrap();
    assert_eq!(stats.matches, 120);
    assert_eq!(stats.runs, 3400);
    assert_eq!(stats.average, Some(30.0));
    assert_eq!(stats.balls, None);

    let captured = server.await.unwrap();
    assert!(captured.request_line.starts_with("GET /api/players/45/stats "));
}

#[tokio::test]
async fn stats_not_found_is_a_failure() {
    let (base, server) = respond_once("404 Not Found", r#"{"detail": "Player not found"}"#).await;
    let backend = HttpBackend::new(&base).unwrap();

    assert!(matches!(
        backend.player_stats(9999).await,
        Err(ApiError::Status { status: 404 })
    ));
    server.await.unwrap();
}

// ===========================================================================
// Prediction
// ===========================================================================

#[tokio::test]
async fn predict_posts_json_body() {
    let (base, server) = respond_once("200 OK", r#"{"predicted_runs": 155.6}"#).await;
    let backend = HttpBackend::new(&base).unwrap();
    let request = PredictionRequest {
        season: 2024,
        venue: "Eden Gardens".into(),
        team: "Kolkata Knight Riders".into(),
        opposition: "Punjab Kings".into(),
        toss_winner: "Kolkata Knight Riders".into(),
        toss_choice: "bat".into(),
        innings: None,
    };

    let result = backend.predict(&request).await.unwrap();
    assert_eq!(result.projected_score(), 156);

    let captured = server.await.unwrap();
    assert!(captured.request_line.starts_with("POST /api/predict "));
    let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "season": 2024,
            "venue": "Eden Gardens",
            "team": "Kolkata Knight Riders",
            "opposition": "Punjab Kings",
            "toss_winner": "Kolkata Knight Riders",
            "toss_choice": "bat",
            "innings": null,
        })
    );
}

// ===========================================================================
// Health
// ===========================================================================

#[tokio::test]
async fn health_check_targets_server_root() {
    let (base, server) = respond_once(
        "200 OK",
        r#"{"status": "ok", "message": "IPL Analytics API is running"}"#,
    )
    .await;
    let backend = HttpBackend::new(&base).unwrap();

    let health = backend.health().await.unwrap();
    assert!(health.is_ok());
    assert_eq!(health.message, "IPL Analytics API is running");

    let captured = server.await.unwrap();
    assert!(captured.request_line.starts_with("GET / "));
}
