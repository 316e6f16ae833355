//! Remote Store Tests
//!
//! `MemoryStore` behaviour, and the HTTP client against a one-shot local listener.

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::{self, JoinHandle};

    use chrono::NaiveDate;
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    use crate::config::StoreConfig;
    use crate::domain::{priority, MissionDraft, MissionPatch, Progress};
    use crate::error::{ErrorKind, StoreError};
    use crate::remote::http_store::{classify_failure, Request};
    use crate::remote::{HttpStore, MemoryStore, RemoteStore};

    const MISSION_JSON: &str = r#"{"_id":"m1","name":"Alpha","status":"active","progress":60,
        "priority":"high","startDate":"2024-03-01","estimatedCompletion":"2024-03-15",
        "description":"Survey the ridge","teamMembers":4,"location":"Ridge 7","__v":0}"#;

    /// Request line and body as seen by the listener
    struct Received {
        method: String,
        path: String,
        body: String,
    }

    /// Answer a single request on a local port with `status` and `body`
    fn serve_once(status: &'static str, body: &'static str) -> (HttpStore, JoinHandle<Received>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/api", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let received = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            received
        });
        let store = HttpStore::new(&StoreConfig::new(base_url)).unwrap();
        (store, handle)
    }

    fn read_request(stream: &mut TcpStream) -> Received {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let header_end = loop {
            let n = stream.read(&mut chunk).unwrap();
            assert!(n > 0, "connection closed before the request head");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .map(|(_, value)| value.trim().parse::<usize>().unwrap())
            .unwrap_or(0);
        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
        Received {
            method: request_line.next().unwrap_or_default().to_string(),
            path: request_line.next().unwrap_or_default().to_string(),
            body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
        }
    }

    fn draft(name: &str) -> MissionDraft {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        MissionDraft::new(name, "Survey the ridge", priority::HIGH, start)
            .with_estimated_days(14)
            .with_team_members(4)
            .with_location("Ridge 7")
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let store = MemoryStore::new();

        let first = store.create(&draft("Alpha")).await.expect("Failed to create");
        let second = store.create(&draft("Bravo")).await.expect("Failed to create");

        assert_ne!(first.id, second.id);
        assert_eq!(store.missions().len(), 2);
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = MemoryStore::new();
        let submitted = draft("Alpha");

        let created = store.create(&submitted).await.unwrap();
        let fetched = store.get(&created.id).await.expect("Get failed");

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.details, submitted);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_required_fields() {
        let store = MemoryStore::new();
        let mut incomplete = draft("Alpha");
        incomplete.description = String::new();

        let err = store.create(&incomplete).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("description"));
        assert!(store.missions().is_empty());
    }

    #[tokio::test]
    async fn test_update_applies_partial_fields() {
        let store = MemoryStore::new();
        let created = store.create(&draft("Alpha")).await.unwrap();

        let updated = store
            .update(&created.id, &MissionPatch::progress(Progress::new(60)))
            .await
            .expect("Update failed");

        assert_eq!(updated.details.progress, Progress::new(60));
        assert_eq!(updated.details.name, "Alpha");
        assert_eq!(store.get(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = MemoryStore::new();

        let get = store.get("ghost").await.unwrap_err();
        let update = store.update("ghost", &MissionPatch::progress(Progress::new(1))).await.unwrap_err();
        let delete = store.delete("ghost").await.unwrap_err();

        assert_eq!(get, StoreError::NotFound("ghost".to_string()));
        assert_eq!(update.kind(), ErrorKind::NotFound);
        assert_eq!(delete.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let store = MemoryStore::new();
        let a = store.create(&draft("Alpha")).await.unwrap();
        let b = store.create(&draft("Bravo")).await.unwrap();

        store.delete(&a.id).await.expect("Delete failed");

        let remaining = store.list().await.unwrap();
        assert_eq!(remaining, vec![b]);
    }

    #[tokio::test]
    async fn test_injected_failure_consumes_one_request() {
        let store = MemoryStore::new();
        store.fail_next(StoreError::Transport("connection reset".to_string()));

        assert!(store.list().await.is_err());
        assert!(store.list().await.is_ok());
        assert_eq!(store.request_count(), 2);
    }

    #[test]
    fn test_http_urls() {
        let store = HttpStore::new(&StoreConfig::new("http://localhost:5000/api/")).unwrap();
        assert_eq!(store.missions_url(), "http://localhost:5000/api/missions");
        assert_eq!(
            store.mission_url("65f0c0ffee"),
            "http://localhost:5000/api/missions/65f0c0ffee"
        );
        assert_eq!(
            store.mission_url("a/b c?"),
            "http://localhost:5000/api/missions/a%2Fb%20c%3F"
        );
    }

    // ========================
    // HTTP requests
    // ========================

    #[tokio::test]
    async fn test_http_list_decodes_collection() {
        let (store, server) = serve_once(
            "200 OK",
            r#"[{"_id":"m1","id":"m1","name":"Alpha","status":"active","progress":60,
                "priority":"high","startDate":"2024-03-01T00:00:00.000Z","estimatedCompletion":"2024-03-15",
                "description":"Survey the ridge","teamMembers":4,"location":"Ridge 7"}]"#,
        );

        let missions = store.list().await.expect("List failed");
        let received = server.join().unwrap();

        assert_eq!(received.method, "GET");
        assert_eq!(received.path, "/api/missions");
        assert_eq!(missions.len(), 1);
        assert_eq!(missions[0].id, "m1");
        assert_eq!(missions[0].details.progress, Progress::new(60));
        assert_eq!(
            missions[0].details.start_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[tokio::test]
    async fn test_http_get_sends_encoded_id() {
        let (store, server) = serve_once("200 OK", MISSION_JSON);

        let mission = store.get("a/b c").await.expect("Get failed");
        let received = server.join().unwrap();

        assert_eq!(received.method, "GET");
        assert_eq!(received.path, "/api/missions/a%2Fb%20c");
        assert_eq!(mission.id, "m1");
    }

    #[tokio::test]
    async fn test_http_create_posts_draft_without_id() {
        let (store, server) = serve_once("201 Created", MISSION_JSON);

        let created = store.create(&draft("Alpha")).await.expect("Create failed");
        let received = server.join().unwrap();

        assert_eq!(received.method, "POST");
        assert_eq!(received.path, "/api/missions");
        let body: Value = serde_json::from_str(&received.body).unwrap();
        assert!(body.get("_id").is_none());
        assert!(body.get("id").is_none());
        assert_eq!(body["name"], "Alpha");
        assert_eq!(body["startDate"], "2024-03-01");
        assert_eq!(body["teamMembers"], 4);
        assert_eq!(created.id, "m1");
        assert_eq!(created.details.name, "Alpha");
    }

    #[tokio::test]
    async fn test_http_update_puts_only_patched_fields() {
        let (store, server) = serve_once("200 OK", MISSION_JSON);

        let updated = store
            .update("m1", &MissionPatch::progress(Progress::new(60)))
            .await
            .expect("Update failed");
        let received = server.join().unwrap();

        assert_eq!(received.method, "PUT");
        assert_eq!(received.path, "/api/missions/m1");
        let body: Value = serde_json::from_str(&received.body).unwrap();
        assert_eq!(body, json!({ "progress": 60 }));
        assert_eq!(updated.details.progress, Progress::new(60));
    }

    #[tokio::test]
    async fn test_http_delete_sends_no_body() {
        let (store, server) = serve_once("200 OK", "");

        store.delete("m1").await.expect("Delete failed");
        let received = server.join().unwrap();

        assert_eq!(received.method, "DELETE");
        assert_eq!(received.path, "/api/missions/m1");
        assert!(received.body.is_empty());
    }

    // ========================
    // HTTP failures
    // ========================

    #[tokio::test]
    async fn test_http_list_missing_collection_is_transport_error() {
        let (store, server) = serve_once("404 Not Found", "");

        let err = store.list().await.unwrap_err();
        server.join().unwrap();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_http_get_unknown_id_is_not_found() {
        let (store, server) = serve_once("404 Not Found", r#"{"message":"Mission not found"}"#);

        let err = store.get("ghost").await.unwrap_err();
        server.join().unwrap();

        assert_eq!(err, StoreError::NotFound("ghost".to_string()));
    }

    #[tokio::test]
    async fn test_http_create_rejected_fields_are_validation_error() {
        let (store, server) = serve_once("400 Bad Request", r#"{"message":"name is required"}"#);

        let err = store.create(&draft("Alpha")).await.unwrap_err();
        server.join().unwrap();

        assert_eq!(err, StoreError::Validation("name is required".to_string()));
    }

    #[tokio::test]
    async fn test_http_create_failure_names_collection() {
        let (store, server) = serve_once("422 Unprocessable Entity", "");
        let expected = format!("422 Unprocessable Entity rejected by {}", store.missions_url());

        let err = store.create(&draft("Alpha")).await.unwrap_err();
        server.join().unwrap();

        assert_eq!(err, StoreError::Validation(expected));
    }

    #[tokio::test]
    async fn test_http_update_bad_request_is_transport_error() {
        let (store, server) = serve_once("400 Bad Request", r#"{"message":"Cast to ObjectId failed"}"#);

        let err = store
            .update("zzz", &MissionPatch::progress(Progress::new(10)))
            .await
            .unwrap_err();
        server.join().unwrap();

        assert_eq!(
            err,
            StoreError::Transport("400 Bad Request: Cast to ObjectId failed".to_string())
        );
    }

    #[tokio::test]
    async fn test_http_delete_unknown_id_is_not_found() {
        let (store, server) = serve_once("404 Not Found", "");

        let err = store.delete("ghost").await.unwrap_err();
        server.join().unwrap();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_http_undecodable_body_is_transport_error() {
        let (store, server) = serve_once("200 OK", "<html>gateway</html>");

        let err = store.get("m1").await.unwrap_err();
        server.join().unwrap();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_classify_failure_per_request() {
        let not_found = StatusCode::NOT_FOUND;
        assert_eq!(
            classify_failure(Request::Get, not_found, "", "m1"),
            StoreError::NotFound("m1".to_string())
        );
        assert_eq!(classify_failure(Request::Update, not_found, "", "m1").kind(), ErrorKind::NotFound);
        assert_eq!(classify_failure(Request::Delete, not_found, "", "m1").kind(), ErrorKind::NotFound);
        assert_eq!(classify_failure(Request::List, not_found, "", "/missions").kind(), ErrorKind::Transport);
        assert_eq!(classify_failure(Request::Create, not_found, "", "/missions").kind(), ErrorKind::Transport);

        let rejected = r#"{"message":"name is required"}"#;
        assert_eq!(
            classify_failure(Request::Create, StatusCode::BAD_REQUEST, rejected, "/missions"),
            StoreError::Validation("name is required".to_string())
        );
        assert_eq!(
            classify_failure(Request::Create, StatusCode::UNPROCESSABLE_ENTITY, "", "/missions").kind(),
            ErrorKind::Validation
        );
        for request in [Request::List, Request::Get, Request::Update, Request::Delete] {
            assert_eq!(
                classify_failure(request, StatusCode::BAD_REQUEST, rejected, "m1").kind(),
                ErrorKind::Transport
            );
        }

        assert_eq!(
            classify_failure(Request::Get, StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"db down"}"#, "m1"),
            StoreError::Transport("500 Internal Server Error: db down".to_string())
        );
        assert_eq!(
            classify_failure(Request::Create, StatusCode::UNAUTHORIZED, "nope", "/missions").kind(),
            ErrorKind::Transport
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let mut config = StoreConfig::new("http://127.0.0.1:9/api");
        config.request_timeout_secs = Some(5);
        let store = HttpStore::new(&config).unwrap();

        let err = store.list().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
