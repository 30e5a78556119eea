//! # Billing Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the lookup store and seed it
//! - Create the queue publisher and the payment service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use billing_hex::{PaymentService, inbound::HttpServer};
use billing_repo::{HttpQueuePublisher, SeedData, build_repo};

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("billing-service"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize OpenTelemetry tracing
    let (otel_tracer, otel_provider) = init_tracer()?;
    let telemetry = tracing_opentelemetry::layer().with_tracer(otel_tracer);

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,billing_app=debug,billing_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting billing server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);
    tracing::info!("Dispatch mode: {:?}", config.dispatch_mode);

    // Build lookup store (handles connection and migration)
    let repo = build_repo(&config.database_url).await?;

    if let Some(path) = &config.seed_file {
        let seed = SeedData::from_file(path).await?;
        repo.seed(&seed).await?;
        tracing::info!(
            "Seeded {} store with {} sellers and {} billings from {}",
            repo.backend(),
            seed.sellers.len(),
            seed.billings.len(),
            path.display()
        );
    }

    // Create the queue publisher and the payment service
    let publisher = HttpQueuePublisher::new(config.publish_timeout)?;
    let service = PaymentService::new(repo, publisher, config.channels)
        .with_dispatch_mode(config.dispatch_mode);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    let _ = otel_provider.shutdown();
    Ok(())
}
