//! HTTP surface (axum): analyze API, admin listing, static frontend.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::Json;

use crate::count::Stopwords;
use crate::pipeline;
use crate::rank::TOP_WORDS;
use crate::store::{CountStore, SaltedKeyer, StoredCount};

/// Shown when the fetch fails, matching the page copy users know.
const BAD_URL_MESSAGE: &str = "The url seems to be wrong!";

/// Shared app state. The store mutex makes each per-word increment atomic
/// across concurrent requests.
pub struct App {
    pub client: reqwest::Client,
    pub stopwords: Stopwords,
    pub keyer: SaltedKeyer,
    pub store: Mutex<CountStore>,
    pub store_path: PathBuf,
}

pub type AppState = Arc<App>;

/// Query params for GET /analyze?url=...
#[derive(serde::Deserialize)]
pub struct AnalyzeQuery {
    pub url: String,
}

/// Analyze response. An empty cloud with `error` unset is the no-words case;
/// with `error` set, the fetch failed. The no-URL case never reaches this
/// handler (it is the page's initial state).
#[derive(serde::Serialize)]
pub struct AnalyzeResponse {
    pub url: String,
    pub cloud: HashMap<String, u32>,
    pub error: Option<String>,
}

/// GET /analyze?url=... -> run the pipeline, persist the ranked counts,
/// return the word cloud.
pub async fn analyze_handler(
    State(app): State<AppState>,
    Query(params): Query<AnalyzeQuery>,
) -> Json<AnalyzeResponse> {
    let url = params.url;
    match pipeline::analyze_async(&app.client, &url, &app.stopwords, TOP_WORDS).await {
        Ok(analysis) => {
            persist(&app, &analysis.ranked);
            Json(AnalyzeResponse {
                url,
                cloud: analysis.cloud,
                error: None,
            })
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "analysis failed");
            Json(AnalyzeResponse {
                url,
                cloud: HashMap::new(),
                error: Some(BAD_URL_MESSAGE.to_string()),
            })
        }
    }
}

/// Record the ranked counts and flush the store to disk. A failed save is
/// logged but does not fail the request; the cloud is still returned.
fn persist(app: &App, ranked: &[(String, u32)]) {
    let mut store = app.store.lock().expect("store lock poisoned");
    store.record(ranked, &app.keyer);
    if let Err(e) = store.save(&app.store_path) {
        tracing::warn!(path = %app.store_path.display(), error = %e, "saving counts failed");
    }
}

/// GET /admin -> all persisted words with cumulative counts, highest first.
pub async fn admin_handler(State(app): State<AppState>) -> Json<Vec<StoredCount>> {
    let store = app.store.lock().expect("store lock poisoned");
    Json(store.all_descending())
}

/// GET / -> static HTML page: URL form plus client-side cloud rendering.
pub async fn index_page() -> axum::response::Html<&'static str> {
    const HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Word Count</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
    h1 { font-size: 1.5rem; }
    input[type="url"] { width: 100%; padding: 0.5rem; font-size: 1rem; box-sizing: border-box; }
    button { margin-top: 0.5rem; padding: 0.5rem 1rem; font-size: 1rem; cursor: pointer; }
    #cloud { margin-top: 1.5rem; line-height: 2.4; text-align: center; }
    #cloud span { margin: 0 0.3rem; color: #06c; }
    .error { color: #c00; }
    .none { color: #666; }
  </style>
</head>
<body>
  <h1>Word Count</h1>
  <form id="form">
    <input type="url" name="url" id="url" placeholder="https://example.com" autofocus>
    <button type="submit">Count words</button>
  </form>
  <div id="cloud"></div>
  <script>
    const form = document.getElementById('form');
    const url = document.getElementById('url');
    const cloud = document.getElementById('cloud');
    form.addEventListener('submit', async (e) => {
      e.preventDefault();
      const target = url.value.trim();
      if (!target) { cloud.innerHTML = ''; return; }
      cloud.innerHTML = '<p class="none">Counting...</p>';
      try {
        const r = await fetch('/analyze?url=' + encodeURIComponent(target));
        const result = await r.json();
        if (result.error) {
          cloud.innerHTML = '<p class="error">' + result.error + '</p>';
        } else if (Object.keys(result.cloud).length === 0) {
          cloud.innerHTML = '<p class="none">No words found.</p>';
        } else {
          cloud.innerHTML = Object.entries(result.cloud).map(([word, category]) =>
            '<span style="font-size: ' + (0.6 + category * 0.25) + 'rem">' + word + '</span>'
          ).join(' ');
        }
      } catch (err) {
        cloud.innerHTML = '<p class="error">Error: ' + err + '</p>';
      }
    });
  </script>
</body>
</html>
"#;
    axum::response::Html(HTML)
}
