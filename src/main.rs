use book_catalog::{
    adapters::{
        json_file::JsonCatalogFile, mock::BookLookup as MockBookLookup,
        open_library::OpenLibraryClient,
    },
    api::{handlers::AppState, router::create_router},
    application::catalog::Catalog,
    cli::{Cli, Commands, Mode, choose_mode, run_menu},
    config::{AppConfig, DEFAULT_API_CATALOG, DEFAULT_TERMINAL_CATALOG},
    ports::BookLookup,
};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing (stderr, so the terminal menu on stdout stays readable)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let lookup: Arc<dyn BookLookup> = if cli.offline {
        tracing::info!("Offline mode: ISBN lookups are disabled");
        Arc::new(MockBookLookup::new())
    } else {
        match OpenLibraryClient::new(config.lookup_base_url.clone(), config.lookup_timeout) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                tracing::error!("Failed to build HTTP client: {}", e);
                return ExitCode::FAILURE;
            }
        }
    };

    let mode = match cli.command {
        Some(Commands::Terminal { file }) => {
            if let Some(file) = file {
                config.catalog_path = Some(file);
            }
            Mode::Terminal
        }
        Some(Commands::Serve { file, port }) => {
            if let Some(file) = file {
                config.catalog_path = Some(file);
            }
            if let Some(port) = port {
                config.port = port;
            }
            Mode::Serve
        }
        None => {
            let mut input = BufReader::new(tokio::io::stdin());
            let mut output = tokio::io::stdout();
            match choose_mode(&mut input, &mut output).await {
                Ok(Some(mode)) => mode,
                Ok(None) => return ExitCode::SUCCESS,
                Err(e) => {
                    tracing::error!("Failed to read from terminal: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    let result = match mode {
        Mode::Terminal => {
            let path = config.catalog_path_or(DEFAULT_TERMINAL_CATALOG);
            run_terminal(path, lookup).await
        }
        Mode::Serve => {
            let path = config.catalog_path_or(DEFAULT_API_CATALOG);
            run_server(path, lookup, config.bind_addr()).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_terminal(path: PathBuf, lookup: Arc<dyn BookLookup>) -> std::io::Result<()> {
    tracing::info!("Catalog file: {}", path.display());
    let catalog = Catalog::open(Arc::new(JsonCatalogFile::new(path)), lookup).await;

    let mut input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    run_menu(&catalog, &mut input, &mut output).await
}

async fn run_server(
    path: PathBuf,
    lookup: Arc<dyn BookLookup>,
    addr: String,
) -> std::io::Result<()> {
    tracing::info!("Catalog file: {}", path.display());
    let catalog = Catalog::open(Arc::new(JsonCatalogFile::new(path)), lookup).await;

    // Create application state
    let app_state = Arc::new(AppState {
        catalog: Arc::new(catalog),
    });

    // Create router
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app).await
}
