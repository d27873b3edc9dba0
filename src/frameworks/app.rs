use std::sync::Arc;

use crate::frameworks::clock::SystemClock;
use crate::frameworks::config;
use crate::frameworks::store::FileSessionStore;
use crate::interface_adapters::clients::ApiClient;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Wired application core handed to the presentation layer. The client
// doubles as both gateway ports; the store is shared so the UI can inspect
// the signed-in profile.
pub struct App {
    pub client: Arc<ApiClient<FileSessionStore, SystemClock>>,
    pub store: Arc<FileSessionStore>,
}

// Composition root, called once at application start.
pub fn init() -> Result<App, reqwest::Error> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let store = Arc::new(FileSessionStore::open(config::session_file_path()));
    let base_url = config::api_base_url();
    tracing::debug!(base_url = %base_url, "api client configured.");

    let client = Arc::new(ApiClient::new(
        base_url,
        config::request_timeout(),
        store.clone(),
        SystemClock,
    )?);

    Ok(App { client, store })
}
