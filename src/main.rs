use anyhow::{Context, Result};
use oseberg_backend::application::{
    ports::{
        ai::TextGenerator,
        time::Clock,
        util::{IdGenerator, SlugGenerator},
    },
    services::{ApplicationServices, ServiceDependencies},
};
use oseberg_backend::config::{AppConfig, LedgerSettings};
use oseberg_backend::domain::{
    blog::{BlogReadRepository, BlogWriteRepository},
    catalog::{CatalogReadRepository, CatalogWriteRepository},
    knowledge::KnowledgeRepository,
    ledger::LedgerSheet,
};
use oseberg_backend::infrastructure::{
    ai::{GeminiConfig, GeminiTextGenerator},
    database,
    ledger::{
        AccessTokenProvider, GoogleSheetsConfig, GoogleSheetsLedger, InMemoryLedgerSheet,
        ServiceAccountTokenProvider,
    },
    repositories::{MongoBlogRepository, MongoCatalogRepository, MongoKnowledgeRepository},
    time::SystemClock,
    util::{DefaultSlugGenerator, ObjectIdGenerator},
};
use oseberg_backend::presentation::http::{
    routes::{RouterConfig, build_router},
    state::{AdminToken, HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let db = database::connect(config.mongodb_uri(), config.mongodb_database())
        .await
        .context("connecting to MongoDB")?;
    database::ensure_indexes(&db)
        .await
        .context("creating indexes")?;

    let blogs = Arc::new(MongoBlogRepository::new(&db));
    let catalogs = Arc::new(MongoCatalogRepository::new(&db));
    let blog_write_repo: Arc<dyn BlogWriteRepository> = blogs.clone();
    let blog_read_repo: Arc<dyn BlogReadRepository> = blogs;
    let catalog_write_repo: Arc<dyn CatalogWriteRepository> = catalogs.clone();
    let catalog_read_repo: Arc<dyn CatalogReadRepository> = catalogs;
    let knowledge_repo: Arc<dyn KnowledgeRepository> =
        Arc::new(MongoKnowledgeRepository::new(&db));

    let http_client = reqwest::Client::new();
    let text_generator = text_generator(&config, &http_client);
    let ledger_sheet = ledger_sheet(&config, &http_client)?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let ids: Arc<dyn IdGenerator> = Arc::new(ObjectIdGenerator);

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        blog_write_repo,
        blog_read_repo,
        catalog_write_repo,
        catalog_read_repo,
        knowledge_repo,
        ledger_sheet,
        text_generator,
        clock,
        slugger,
        ids,
        site_url: config.site_url().to_string(),
    }));

    let admin_token = config.admin_api_token().map(AdminToken::new);
    if admin_token.is_none() {
        tracing::warn!("ADMIN_API_TOKEN is not set, admin routes are open");
    }

    let state = HttpState {
        services,
        admin_token,
    };
    let router_config = RouterConfig {
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit: Some(config.rate_limit()),
    };
    let app = build_router(state, &router_config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn text_generator(
    config: &AppConfig,
    client: &reqwest::Client,
) -> Option<Arc<dyn TextGenerator>> {
    let Some(settings) = config.gemini() else {
        tracing::warn!("GOOGLE_GENERATIVE_AI_API_KEY is not set, chat is unavailable");
        return None;
    };
    let generator = GeminiTextGenerator::with_client(
        client.clone(),
        GeminiConfig {
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            api_base: settings.api_base.clone(),
        },
    );
    tracing::info!(model = %settings.model, "chat provider configured");
    let generator: Arc<dyn TextGenerator> = Arc::new(generator);
    Some(generator)
}

fn ledger_sheet(
    config: &AppConfig,
    client: &reqwest::Client,
) -> Result<Option<Arc<dyn LedgerSheet>>> {
    match config.ledger() {
        LedgerSettings::Disabled => {
            tracing::warn!("GOOGLE_SHEET_ID is not set, submissions are not recorded");
            Ok(None)
        }
        LedgerSettings::Memory => {
            tracing::info!("submission ledger kept in memory");
            let sheet: Arc<dyn LedgerSheet> = Arc::new(InMemoryLedgerSheet::new());
            Ok(Some(sheet))
        }
        LedgerSettings::Sheets(settings) => {
            let tokens: Arc<dyn AccessTokenProvider> = Arc::new(
                ServiceAccountTokenProvider::new(client.clone(), settings.credentials.clone())
                    .context("loading service account key")?,
            );
            let sheet = GoogleSheetsLedger::new(
                client.clone(),
                tokens,
                GoogleSheetsConfig {
                    spreadsheet_id: settings.spreadsheet_id.clone(),
                    sheet_name: settings.sheet_name.clone(),
                    api_base: settings.api_base.clone(),
                },
            );
            tracing::info!(sheet = %settings.sheet_name, "submission ledger uses Google Sheets");
            let sheet: Arc<dyn LedgerSheet> = Arc::new(sheet);
            Ok(Some(sheet))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,mongodb=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
