use tracing::info;

use portal::{AppState, Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env();
            config
        }
    };

    // Initialize logging
    if let Err(e) = portal::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        portal::logging::init_console_only(&config.logging.level);
    }

    info!("Portal site starting");

    if let Err(e) = run(config).await {
        tracing::error!("fatal: {e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> portal::Result<()> {
    let db = Database::open(&config.database.path).await?;
    let state = AppState::new(db, &config.session.secret)?;
    let server = WebServer::new(&config.server, state)?;
    server.run().await
}
