//! HttpCatalog against a scripted local server.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use benchview::client::retry::RetryConfig;
use benchview::client::{CatalogSource, HttpCatalog, HttpStatusError};
use benchview::config::Config;
use benchview::view::ModelView;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const MODEL: &str = r#"{"modelId":"m-1","name":"M","benchmarks":[
  {"name":"flores","languages":{"sourceLanguage":"en","targetLanguage":"hi"},
   "scores":[{"metricName":"bleu","score":"32.1"}]}]}"#;

/// Reads one HTTP request (headers plus Content-Length body) and returns it.
async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let len = text[..end]
                .lines()
                .find_map(|l| {
                    let lower = l.to_ascii_lowercase();
                    lower.strip_prefix("content-length:").map(|v| v.trim().parse::<usize>().unwrap_or(0))
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Serves `script` responses in order, one per connection, recording requests.
/// A status of 0 closes the connection without answering.
async fn spawn_server(script: Vec<(u16, &'static str)>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    tokio::spawn(async move {
        for (status, body) in script {
            let (mut stream, _) = listener.accept().await.unwrap();
            let req = read_request(&mut stream).await;
            seen_clone.lock().unwrap().push(req);
            if status == 0 {
                drop(stream);
                continue;
            }
            let resp = format!(
                "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(resp.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
        }
    });
    (format!("http://{}/api", addr), seen)
}

fn config(base: String) -> Config {
    Config {
        api_base: base,
        timeout_secs: 5,
        retry: RetryConfig {
            max_retries: 2,
            base_delay_ms: 1,
            max_delay_ms: 5,
            jitter_factor: 0.0,
        },
        fixture_dir: None,
    }
}

#[tokio::test]
async fn fetches_model_and_posts_id() {
    let (base, seen) = spawn_server(vec![(200, MODEL)]).await;
    let catalog = HttpCatalog::new(&config(base)).unwrap();

    let model = catalog.view_model("m-1").await.unwrap();
    let view = ModelView::from_model(&model);
    assert_eq!(view.values()[0].language_label, "en-hi");

    let requests = seen.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("POST /api/services/details/view_model "));
    assert!(requests[0].contains(r#"{"modelId":"m-1"}"#));
}

#[tokio::test]
async fn retries_unavailable_then_succeeds() {
    let (base, seen) = spawn_server(vec![(503, "busy"), (200, MODEL)]).await;
    let catalog = HttpCatalog::new(&config(base)).unwrap();

    let model = catalog.view_model("m-1").await.unwrap();
    assert_eq!(model.benchmarks.len(), 1);
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn not_found_is_not_retried() {
    let (base, seen) = spawn_server(vec![(404, r#"{"detail":"no such model"}"#)]).await;
    let catalog = HttpCatalog::new(&config(base)).unwrap();

    let err = catalog.view_model("missing").await.unwrap_err();
    let status = err.downcast_ref::<HttpStatusError>().expect("status error");
    assert_eq!(status.status, 404);
    assert!(status.body.contains("no such model"));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn retries_dropped_connection_then_succeeds() {
    let (base, seen) = spawn_server(vec![(0, ""), (200, MODEL)]).await;
    let catalog = HttpCatalog::new(&config(base)).unwrap();

    let model = catalog.view_model("m-1").await.unwrap();
    assert_eq!(model.model_id, "m-1");
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn refused_connection_is_retried_then_reported() {
    // Bind then release a port so nothing is listening on it.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let mut cfg = config(format!("http://{}/api", addr));
    cfg.retry.base_delay_ms = 20;
    cfg.retry.max_delay_ms = 100;
    let catalog = HttpCatalog::new(&cfg).unwrap();

    let started = Instant::now();
    let err = catalog.view_model("m-1").await.unwrap_err();
    let net = err.downcast_ref::<reqwest::Error>().expect("network error");
    assert!(net.is_connect());
    // two backoff sleeps of 20ms and 40ms before giving up
    assert!(started.elapsed() >= Duration::from_millis(60));
}
