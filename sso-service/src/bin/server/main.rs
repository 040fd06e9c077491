use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sso_service::config::Config;
use sso_service::config::LogFormat;
use sso_service::domain::auth::ports::UserRepository;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::inbound::http::router::create_router;
use sso_service::outbound::crypto::Argon2PasswordHasher;
use sso_service::outbound::crypto::JwtTokenIssuer;
use sso_service::outbound::repositories::InMemoryUserRepository;
use sso_service::outbound::repositories::PostgresUserRepository;
use sso_service::proto::auth_server::AuthServer;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    init_tracing(config.log.format);

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );
    tracing::info!(
        http_port = config.server.http_port,
        grpc_port = config.server.grpc_port,
        request_timeout_secs = config.server.request_timeout_secs,
        token_ttl_hours = config.jwt.expiration_hours,
        persistent_store = config.database.url.is_some(),
        "Configuration loaded"
    );

    match config.database.url.clone() {
        Some(url) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .acquire_timeout(Duration::from_secs(config.server.request_timeout_secs))
                .connect(&url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            serve(&config, Arc::new(PostgresUserRepository::new(pg_pool))).await
        }
        None => {
            tracing::warn!("No database configured, users are kept in memory");
            serve(&config, Arc::new(InMemoryUserRepository::new())).await
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sso_service=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn serve<R: UserRepository>(config: &Config, repository: Arc<R>) -> anyhow::Result<()> {
    let token_issuer = Arc::new(JwtTokenIssuer::new(
        config.jwt.secret.as_bytes(),
        chrono::Duration::hours(config.jwt.expiration_hours),
    )?);
    let password_hasher = Arc::new(Argon2PasswordHasher::new());

    let auth_service = Arc::new(AuthService::new(repository, password_hasher, token_issuer));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let request_timeout = Duration::from_secs(config.server.request_timeout_secs);
    let http_application = create_router(Arc::clone(&auth_service), request_timeout);
    let http_server =
        tokio::spawn(async move { axum::serve(http_listener, http_application).await });

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = AuthGrpcService::new(auth_service);
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    let grpc_server = tokio::spawn(async move {
        Server::builder()
            .timeout(request_timeout)
            .add_service(AuthServer::new(grpc_service))
            .serve(grpc_address)
            .await
    });

    let (http_result, grpc_result) = tokio::try_join!(http_server, grpc_server)?;
    http_result?;
    grpc_result?;
    tracing::info!("Servers exited");

    Ok(())
}
