//! Ticket Copilot server binary.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ticket_copilot::adapters::ai::OpenAIProvider;
use ticket_copilot::adapters::http::{api_router, RecordsAppState, TriageAppState};
use ticket_copilot::adapters::relay::{HttpDraftRelay, ProviderDraftRelay, UnconfiguredRelay};
use ticket_copilot::adapters::storage::JsonFileRecordStore;
use ticket_copilot::config::{AppConfig, LogFormat, ServerConfig};
use ticket_copilot::domain::triage::TicketAnalyzer;
use ticket_copilot::ports::DraftRelay;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let analyzer = Arc::new(TicketAnalyzer::default());
    let relay = build_relay(&config);
    let store = Arc::new(JsonFileRecordStore::new(&config.storage.records_path));

    let triage = TriageAppState {
        analyzer: analyzer.clone(),
        relay,
        relay_timeout: config.relay.timeout(),
    };
    let records = RecordsAppState {
        analyzer,
        store,
        raw_text_limit: config.storage.raw_text_limit,
    };

    let app = api_router(triage, records, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        %addr,
        environment = ?config.server.environment,
        records_path = %config.storage.records_path.display(),
        "Server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Remote relay first, then the in-process provider, else unconfigured.
fn build_relay(config: &AppConfig) -> Arc<dyn DraftRelay> {
    if let Some(url) = config.relay.remote_url() {
        info!(url, "Drafting via remote relay");
        return Arc::new(HttpDraftRelay::new(url, config.relay.timeout()));
    }

    match config.ai.openai_config() {
        Some(openai) => {
            info!(model = %openai.model, "Drafting via OpenAI");
            let provider = Arc::new(OpenAIProvider::new(openai));
            Arc::new(
                ProviderDraftRelay::new(provider)
                    .with_max_tokens(config.ai.max_tokens)
                    .with_temperature(config.ai.temperature),
            )
        }
        None => {
            warn!("No OpenAI API key configured; drafts use local macros only");
            Arc::new(UnconfiguredRelay)
        }
    }
}
