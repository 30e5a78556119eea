//! Client example demonstrating payment batches against a running server.
//!
//! Run with: cargo run -p billing-app --example client_example

use std::net::SocketAddr;

use billing_client::{BillingClient, ClientError};
use billing_hex::{PaymentService, inbound::HttpServer};
use billing_repo::{InMemoryPublisher, MEMORY_URL, SeedData, build_repo};
use billing_types::{Billing, ChannelConfig, PaymentInput};
use tokio::net::TcpListener;

fn payment(code: &str, amount: &str) -> anyhow::Result<PaymentInput> {
    Ok(PaymentInput {
        billing_code: code.to_string(),
        amount: amount.parse()?,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Seed an in-memory store
    let repo = build_repo(MEMORY_URL).await?;
    repo.seed(&SeedData {
        sellers: vec!["V001".into()],
        billings: vec![
            Billing::new("C001", "100.00".parse()?),
            Billing::new("C002", "250.00".parse()?),
            Billing::new("C003", "80.00".parse()?),
        ],
    })
    .await?;

    let channels = ChannelConfig::new("queue.partial", "queue.full", "queue.overpaid")?;
    let service = PaymentService::new(repo, InMemoryPublisher::new(), channels);
    let server = HttpServer::new(service);
    let router = server.router();

    // Start server in background on a free port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    println!("🚀 Server listening on {addr}");

    let client = BillingClient::new(format!("http://{addr}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: one batch covering every status
    // ─────────────────────────────────────────────────────────────────────────

    let health = client.health().await?;
    println!("✅ Server health: {health}");

    let batch = client
        .process_payments(
            "V001",
            vec![
                payment("C001", "100.00")?,
                payment("C002", "50.00")?,
                payment("C003", "120.00")?,
            ],
        )
        .await?;
    for p in &batch.payments {
        if let Some(status) = p.status {
            println!("✅ {} paid {} -> {}", p.billing_code, p.amount, status);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: fail-fast on an unknown billing code
    // ─────────────────────────────────────────────────────────────────────────

    let result = client
        .process_payments(
            "V001",
            vec![payment("C001", "10.00")?, payment("C999", "10.00")?],
        )
        .await;
    match result {
        Err(ClientError::Api { status, message }) => {
            println!("✅ Rejected with {status}: {message}");
        }
        other => anyhow::bail!("expected a rejection, got {:?}", other),
    }

    let result = client.process_payments("V404", vec![]).await;
    if let Err(e) = result {
        println!("✅ Unknown seller: {e}");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // What reached the channels
    // ─────────────────────────────────────────────────────────────────────────

    // The first payment of the rejected batch stays published.
    for message in server.service().publisher().messages() {
        println!(
            "📨 {} <- {}",
            message.channel,
            String::from_utf8_lossy(&message.payload)
        );
    }

    Ok(())
}
