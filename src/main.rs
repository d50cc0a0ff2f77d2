use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use clap::{Parser, Subcommand};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use sinkhole_registry::core::config::Config;
use sinkhole_registry::core::error::Result as AppResult;
use sinkhole_registry::core::openapi::{ApiDoc, SwaggerInfoModifier};
use sinkhole_registry::core::{database, middleware};
use sinkhole_registry::features::sinkholes::{routes as sinkholes_routes, SinkholeService};
use sinkhole_registry::tasks;

#[derive(Debug, Parser)]
#[command(
    name = "sinkhole-registry",
    about = "Sinkhole catalog API server and maintenance tasks"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API server (the default when no subcommand is given)
    Serve,
    /// Clear the catalog and load the built-in sample dataset
    Seed,
    /// Clear the catalog and load one sinkhole per CSV row
    ImportCsv {
        /// CSV file with at least `Latitude` and `Longitude` columns
        #[arg(long)]
        file: PathBuf,
    },
    /// Move every sinkhole to a random point near a reference coordinate
    Relocate {
        /// Reference latitude
        #[arg(long, default_value_t = tasks::relocate::ROME_LATITUDE)]
        latitude: f64,
        /// Reference longitude
        #[arg(long, default_value_t = tasks::relocate::ROME_LONGITUDE)]
        longitude: f64,
    },
    /// Export the full catalog as a JSON array
    Export {
        /// Output file path
        #[arg(long, default_value = "sinkholes-data.json")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli, worker_threads))
}

async fn async_main(cli: Cli, worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations automatically
    tracing::info!("Running database migrations...");
    database::MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    let sinkhole_service = Arc::new(SinkholeService::new(pool));

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, sinkhole_service, worker_threads).await,
        Command::Seed => run_task(tasks::seed::run(&sinkhole_service).await),
        Command::ImportCsv { file } => {
            run_task(tasks::import_csv::run(&sinkhole_service, &file).await)
        }
        Command::Relocate {
            latitude,
            longitude,
        } => run_task(tasks::relocate::run(&sinkhole_service, latitude, longitude).await),
        Command::Export { output } => run_task(tasks::export::run(&sinkhole_service, &output).await),
    }
}

/// Report a maintenance task outcome. Failures are logged rather than
/// propagated as a panic; the process exits non-zero so schedulers notice.
fn run_task(result: AppResult<()>) -> anyhow::Result<()> {
    if let Err(e) = result {
        tracing::error!("Task failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn serve(
    config: Config,
    sinkhole_service: Arc<SinkholeService>,
    worker_threads: usize,
) -> anyhow::Result<()> {
    // Log system info
    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let app = Router::new()
        .merge(swagger)
        .merge(sinkholes_routes::routes(sinkhole_service))
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
