//! Pipeline orchestrator: fetch -> sanitize -> tokenize -> count -> rank -> bucketize.

use std::collections::HashMap;

use crate::count::{self, Stopwords};
use crate::error::CloudError;
use crate::{cloud, fetch, rank, sanitize, tokenize};

/// Result of analyzing one page. `ranked` is ascending by count and feeds the
/// persistence collaborator; `cloud` maps each ranked word to its display
/// category and feeds presentation.
#[derive(Debug, Clone)]
pub struct WordCloudAnalysis {
    pub ranked: Vec<(String, u32)>,
    pub cloud: HashMap<String, u32>,
}

impl WordCloudAnalysis {
    fn empty() -> Self {
        Self {
            ranked: Vec::new(),
            cloud: HashMap::new(),
        }
    }
}

/// Fetch `url` and run the full analysis. The fetch is the only stage that
/// can fail; on `CloudError::Fetch` no partial result is produced.
pub async fn analyze_async(
    client: &reqwest::Client,
    url: &str,
    stopwords: &Stopwords,
    n: usize,
) -> Result<WordCloudAnalysis, CloudError> {
    tracing::info!(url, "fetching page");
    let raw = fetch::fetch_document(client, url).await?;
    tracing::debug!(bytes = raw.len(), "fetched document");
    Ok(analyze_text(&raw, stopwords, n))
}

/// The pure post-fetch stages. Total over any input: a page with no countable
/// words yields an empty analysis rather than invoking the bucketizer.
pub fn analyze_text(raw: &str, stopwords: &Stopwords, n: usize) -> WordCloudAnalysis {
    let text = sanitize::sanitize(raw);
    let tokens = tokenize::tokenize(&text);
    let frequencies = count::count(&tokens, stopwords);
    let ranked = rank::top_n(&frequencies, n);
    if ranked.is_empty() {
        tracing::debug!("no countable words on page");
        return WordCloudAnalysis::empty();
    }

    // Non-empty ranking, so bucketize cannot see its error case.
    let cloud = cloud::bucketize(&ranked).unwrap_or_default();
    tracing::info!(words = ranked.len(), "analysis complete");
    WordCloudAnalysis { ranked, cloud }
}

/// Blocking wrapper for the CLI path: builds a runtime and runs one analysis.
pub fn analyze(
    url: &str,
    stopwords: &Stopwords,
    n: usize,
) -> Result<WordCloudAnalysis, Box<dyn std::error::Error + Send + Sync>> {
    let rt = tokio::runtime::Runtime::new()?;
    let client = reqwest::Client::new();
    Ok(rt.block_on(analyze_async(&client, url, stopwords, n))?)
}
