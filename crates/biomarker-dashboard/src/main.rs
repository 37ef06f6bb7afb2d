//! Biomarker dashboard binary.
//!
//! Loads the reference-range table once at startup and prints a card
//! per seed biomarker, each followed by its detail block. Set
//! `BIOMARKER_JSON=1` to dump the card models as JSON instead.

use biomarker_dashboard::{build_cards, default_biomarkers, render_card, render_detail};
use biomarker_loader::{LoadConfig, ReferenceStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CSV_PATH: &str = "data/reference_ranges.csv";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let csv_path =
        std::env::var("BIOMARKER_CSV_PATH").unwrap_or_else(|_| DEFAULT_CSV_PATH.to_string());

    tracing::info!("Loading reference ranges from: {}", csv_path);

    // The one suspension point: a single read of the table resource.
    let text = tokio::fs::read_to_string(&csv_path).await?;

    let store = ReferenceStore::from_text(&text, LoadConfig::default());
    tracing::info!("Loaded {} reference records", store.record_count());

    let cards = build_cards(&default_biomarkers(), &store);

    if std::env::var("BIOMARKER_JSON").is_ok_and(|v| v == "1") {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    for card in &cards {
        println!("{}", render_card(card));
        println!("{}", render_detail(card));
    }

    Ok(())
}
