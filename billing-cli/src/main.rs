//! Billing CLI
//!
//! Command-line interface for the billing reconciliation API.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use billing_client::BillingClient;
use billing_types::{Amount, PaymentInput, ProcessPaymentsRequest};

#[derive(Parser)]
#[command(name = "billing")]
#[command(author, version, about = "Billing reconciliation API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the billing API
    #[arg(
        long,
        env = "BILLING_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a batch of payments for a seller
    Process {
        /// Seller code
        #[arg(long, required_unless_present = "file")]
        seller: Option<String>,
        /// Payment as BILLING_CODE=AMOUNT, repeatable
        #[arg(long = "payment", value_parser = parse_payment)]
        payments: Vec<PaymentInput>,
        /// JSON request body to submit instead of --seller/--payment
        #[arg(long, conflicts_with_all = ["seller", "payments"])]
        file: Option<PathBuf>,
    },
    /// Check API health
    Health,
}

fn parse_payment(s: &str) -> Result<PaymentInput> {
    let (code, amount) = s
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected BILLING_CODE=AMOUNT, got: {}", s))?;
    let code = code.trim();
    if code.is_empty() {
        anyhow::bail!("Missing billing code in: {}", s);
    }
    let amount: Amount = amount.parse()?;
    Ok(PaymentInput {
        billing_code: code.to_string(),
        amount,
    })
}

async fn load_request(path: &Path) -> Result<ProcessPaymentsRequest> {
    let raw = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&raw)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = BillingClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Process {
            seller,
            payments,
            file,
        } => {
            let req = match (file, seller) {
                (Some(path), _) => load_request(&path).await?,
                (None, Some(seller_code)) => ProcessPaymentsRequest {
                    seller_code,
                    payments,
                },
                (None, None) => anyhow::bail!("Either --seller or --file is required"),
            };
            let batch = client.submit(&req).await?;
            println!("{}", serde_json::to_string_pretty(&batch)?);
        }
    }

    Ok(())
}
