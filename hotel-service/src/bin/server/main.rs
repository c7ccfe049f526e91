use std::sync::Arc;

use auth::Authenticator;
use auth::SecretStore;
use hotel_service::config::Config;
use hotel_service::config::ConfiguredSecret;
use hotel_service::inbound::http::router::create_router;
use hotel_service::inbound::http::router::AppState;
use hotel_service::inbound::http::router::HttpSettings;
use hotel_service::outbound::repositories::PostgresBookingRepository;
use hotel_service::outbound::repositories::PostgresClientRepository;
use hotel_service::outbound::repositories::PostgresCredentialRepository;
use hotel_service::outbound::repositories::PostgresRoomRepository;
use hotel_service::telemetry::init_tracing;
use hotel_service::AuthService;
use hotel_service::BookingService;
use hotel_service::ClientService;
use hotel_service::RoomService;
use sqlx::postgres::PgPoolOptions;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;

    init_tracing(&config.logging)?;

    tracing::info!(
        service = "hotel-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    tracing::info!(
        address = %config.server.address(),
        request_timeout_secs = config.server.request_timeout_secs,
        token_lifetime_hours = config.jwt.expiration_hours,
        rotation_interval_hours = config.jwt.rotation_interval_hours,
        log_file = ?config.logging.file,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect_with(config.database.connect_options()?)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        statement_timeout_secs = config.database.statement_timeout_secs,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let secret_store = Arc::new(
        SecretStore::new(ConfiguredSecret).with_rotation_interval(config.jwt.rotation_interval()),
    );
    // An unset jwt.secret aborts startup.
    secret_store.ensure_fresh()?;

    let authenticator = Arc::new(
        Authenticator::new(Arc::clone(&secret_store))
            .with_token_lifetime(config.jwt.token_lifetime()),
    );

    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::new(PostgresCredentialRepository::new(pg_pool.clone())),
            authenticator,
        )),
        client_service: Arc::new(ClientService::new(Arc::new(
            PostgresClientRepository::new(pg_pool.clone()),
        ))),
        room_service: Arc::new(RoomService::new(Arc::new(PostgresRoomRepository::new(
            pg_pool.clone(),
        )))),
        booking_service: Arc::new(BookingService::new(Arc::new(
            PostgresBookingRepository::new(pg_pool),
        ))),
    };

    let settings = HttpSettings::new(&config.cors, config.server.request_timeout());
    let http_application = create_router(state, &settings);

    let http_address = config.server.address();
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
