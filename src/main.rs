//! word-cloud: fetch a page, count its visible words, serve a word cloud.

mod cloud;
mod count;
mod error;
mod fetch;
mod pipeline;
mod rank;
mod sanitize;
mod store;
mod tokenize;
mod web;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::count::Stopwords;
use crate::store::{CountStore, SaltedKeyer};

const DEFAULT_STORE_PATH: &str = "counts.json";
const DEFAULT_SALT: &str = "this is the salt";

#[derive(Parser)]
#[command(name = "word-cloud")]
#[command(about = "Fetch a web page, count its visible words, serve a word cloud")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze one URL and print the ranked words with cloud categories.
    Analyze {
        /// Page to fetch and analyze.
        #[arg(long, short)]
        url: String,

        /// How many top words to keep.
        #[arg(long, short = 'n', default_value_t = rank::TOP_WORDS)]
        top: usize,

        /// Stopword language ("en", "de", "fr", ...).
        #[arg(long, default_value = "en")]
        lang: String,
    },

    /// Start the word cloud web server.
    Serve {
        /// Port to listen on.
        #[arg(long, short, default_value_t = 3000)]
        port: u16,

        /// Counts store file path.
        #[arg(long, short, default_value = DEFAULT_STORE_PATH)]
        store: String,

        /// Stopword language ("en", "de", "fr", ...).
        #[arg(long, default_value = "en")]
        lang: String,

        /// Salt for the stored word identifiers.
        #[arg(long, default_value = DEFAULT_SALT)]
        salt: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze { url, top, lang } => run_analyze(&url, top, &lang)?,
        Command::Serve {
            port,
            store,
            lang,
            salt,
        } => run_serve(port, &store, &lang, &salt)?,
    }
    Ok(())
}

fn run_analyze(url: &str, top: usize, lang: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let stopwords = Stopwords::for_language(lang);
    let analysis = pipeline::analyze(url, &stopwords, top)?;
    if analysis.ranked.is_empty() {
        println!("No words found on {url}");
        return Ok(());
    }
    for (word, count) in analysis.ranked.iter().rev() {
        println!("{count:>6}  {word}  (category {})", analysis.cloud[word.as_str()]);
    }
    Ok(())
}

fn run_serve(
    port: u16,
    store_path: &str,
    lang: &str,
    salt: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let store_path = PathBuf::from(store_path);
    let store = CountStore::load(&store_path)?;
    tracing::info!(words = store.len(), path = %store_path.display(), "loaded counts store");

    let state: web::AppState = Arc::new(web::App {
        client: reqwest::Client::new(),
        stopwords: Stopwords::for_language(lang),
        keyer: SaltedKeyer::new(salt),
        store: Mutex::new(store),
        store_path,
    });

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let app = axum::Router::new()
            .route("/", axum::routing::get(web::index_page))
            .route("/analyze", axum::routing::get(web::analyze_handler))
            .route("/admin", axum::routing::get(web::admin_handler))
            .with_state(state);

        let addr = format!("127.0.0.1:{}", port);
        println!("Listening on http://{}", addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;
        Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
    })?;
    Ok(())
}
