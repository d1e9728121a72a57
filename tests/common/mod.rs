//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Handle to a running mock backend.
#[allow(dead_code)]
pub struct MockBackend {
    pub addr: SocketAddr,
    requests: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

/// Start a programmable mock backend on an ephemeral port. `f` receives the
/// request path and returns the status and body.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> MockBackend
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = requests.clone();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let counter = counter.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 4096];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let request = String::from_utf8_lossy(&buf[..n]);
                        let path = request
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or("/")
                            .to_string();
                        counter.fetch_add(1, Ordering::SeqCst);

                        let (status, body) = f(path).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockBackend { addr, requests }
}

/// Mock CMS serving `band_content(band_id)` at `/api/bands/{band_id}`.
#[allow(dead_code)]
pub async fn start_mock_cms(band_id: &'static str) -> MockBackend {
    start_programmable_backend(move |path| async move {
        if path == format!("/api/bands/{}", band_id) {
            (200, band_content(band_id, "Night Owls (CMS)").to_string())
        } else {
            (404, r#"{"error":"not found"}"#.to_string())
        }
    })
    .await
}

#[allow(dead_code)]
pub fn profile(band_id: &str, name: &str) -> Value {
    json!({
        "id": band_id,
        "name": name,
        "tagline": "Loud after midnight",
        "genre": "indie-rock",
        "theme": {
            "primaryColor": "red-900",
            "secondaryColor": "gray-800",
            "accentColor": "#ffcc00",
            "particleEffects": false,
            "glowEffects": true
        },
        "seo": {
            "metaTitle": format!("{} | Official Site", name),
            "metaDescription": "Indie rock from Leeds",
            "keywords": ["indie", "rock"]
        }
    })
}

#[allow(dead_code)]
pub fn about() -> Value {
    json!({
        "title": "About",
        "descriptions": { "short": "Short.", "medium": "Medium.", "long": "Long." }
    })
}

#[allow(dead_code)]
pub fn social() -> Value {
    json!({
        "platforms": {
            "instagram": { "url": "https://instagram.com/nightowls", "active": true },
            "bandcamp": { "url": "https://nightowls.bandcamp.com", "active": true }
        },
        "preferredOrder": ["bandcamp", "instagram"]
    })
}

#[allow(dead_code)]
pub fn contact() -> Value {
    json!({
        "primary": { "email": "hello@nightowls.test" },
        "office": {
            "address": "1 Mill Lane",
            "city": "Leeds",
            "zip": "LS1 1AA",
            "country": "UK"
        }
    })
}

#[allow(dead_code)]
pub fn shows() -> Value {
    json!({
        "upcoming": [
            {
                "id": "garage",
                "date": "2099-03-01",
                "venue": { "name": "Garage", "city": "Glasgow", "country": "UK" }
            }
        ]
    })
}

#[allow(dead_code)]
pub fn band_content(band_id: &str, name: &str) -> Value {
    json!({
        "profile": profile(band_id, name),
        "about": about(),
        "social": social(),
        "contact": contact(),
        "shows": shows(),
    })
}

/// Write the five file-source documents for `band_id` under `root`.
#[allow(dead_code)]
pub fn write_band_files(root: &Path, band_id: &str, name: &str) {
    let base = root.join(band_id);
    std::fs::create_dir_all(base.join("data")).unwrap();
    let docs = [
        ("band-profile.json", profile(band_id, name)),
        ("data/about.json", about()),
        ("data/social.json", social()),
        ("data/contact.json", contact()),
        ("data/shows.json", shows()),
    ];
    for (file, value) in docs {
        std::fs::write(base.join(file), serde_json::to_vec_pretty(&value).unwrap()).unwrap();
    }
}
