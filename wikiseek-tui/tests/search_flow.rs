use serde_json::json;
use wikiseek::app::App;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(server: &MockServer) -> App {
    App::new(format!("{}/w/api.php", server.uri()))
}

#[tokio::test]
async fn successful_search_populates_the_results_surface() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("action", "query"))
        .and(query_param("generator", "search"))
        .and(query_param("gsrsearch", "cat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {
                "pages": {
                    "1": {"pageid": 1, "title": "Cat", "extract": "A cat is..."}
                }
            }
        })))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.search_state.input = "cat".to_string();
    app.search().await.unwrap();

    assert_eq!(app.view.results.len(), 1);
    assert_eq!(app.view.results[0].page_id, 1);
    assert_eq!(app.view.results[0].title, "Cat");
    assert_eq!(app.view.results[0].intro, "A cat is...");
    assert!(app.view.error.is_none());
    assert!(app.view.ui_enabled);
}

#[tokio::test]
async fn empty_input_issues_no_request_and_changes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.search().await.unwrap();

    assert!(app.view.results.is_empty());
    assert!(app.view.error.is_none());
    assert!(app.view.ui_enabled);
    server.verify().await;
}

#[tokio::test]
async fn embedded_api_error_reaches_the_error_surface() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"code": "ratelimited", "info": "Too many requests"}
        })))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.search_state.input = "cat".to_string();
    app.search().await.unwrap();

    let error = app.view.error.as_deref().unwrap();
    assert!(error.contains("Too many requests"), "got: {}", error);
    assert!(app.view.results.is_empty());
    assert!(app.view.ui_enabled);
}

#[tokio::test]
async fn transport_failure_reaches_the_error_surface() {
    // Nothing listens on the discard port, so the connection is refused.
    let mut app = App::new("http://127.0.0.1:9/w/api.php");
    app.search_state.input = "cat".to_string();
    app.search().await.unwrap();

    let error = app.view.error.as_deref().unwrap();
    assert!(!error.is_empty());
    assert!(app.view.results.is_empty());
    assert!(app.view.ui_enabled);
}

#[tokio::test]
async fn http_error_status_reaches_the_error_surface() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(503).set_body_string("service unavailable"))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.search_state.input = "cat".to_string();
    app.search().await.unwrap();

    let error = app.view.error.as_deref().unwrap();
    assert!(error.contains("503"), "got: {}", error);
    assert!(app.view.ui_enabled);
}

#[tokio::test]
async fn zero_hit_search_leaves_an_empty_results_surface() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"batchcomplete": ""})))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.search_state.input = "zxqvbn".to_string();
    app.search().await.unwrap();

    assert!(app.view.results.is_empty());
    assert!(app.view.error.is_none());
    assert!(app.view.ui_enabled);
}

#[tokio::test]
async fn stale_results_are_cleared_when_a_later_search_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("gsrsearch", "cat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {
                "pages": {
                    "1": {"pageid": 1, "title": "Cat", "extract": "A cat is..."}
                }
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("gsrsearch", "dog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"info": "Search backend unavailable"}
        })))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.search_state.input = "cat".to_string();
    app.search().await.unwrap();
    assert_eq!(app.view.results.len(), 1);

    app.search_state.input = "dog".to_string();
    app.search().await.unwrap();

    // The failed search must not leave the previous results beside the
    // new error message.
    assert!(app.view.results.is_empty());
    assert!(app.view.error.as_deref().unwrap().contains("unavailable"));
    assert!(app.view.ui_enabled);
}

#[tokio::test]
async fn enter_key_is_equivalent_to_explicit_activation() {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("gsrsearch", "cat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {
                "pages": {
                    "1": {"pageid": 1, "title": "Cat", "extract": "A cat is..."}
                }
            }
        })))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.search_state.input = "cat".to_string();

    let mut enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
    enter.kind = KeyEventKind::Press;
    app.handle_key_event(enter).unwrap();
    assert!(app.search_state.pending_search);

    // Drain the queued search the way the main loop does.
    app.search_state.pending_search = false;
    app.search().await.unwrap();

    assert_eq!(app.view.results.len(), 1);
    assert_eq!(app.view.results[0].title, "Cat");
    assert!(app.view.error.is_none());
    assert!(app.view.ui_enabled);
}
