//! Compressed Record Encoding Demo
//!
//! Run with: `cargo run --example compressed_ledger --features compression`
//!
//! Shows the store framing records as LZ4-wrapped JSON in the world
//! state, with the ledger operations unchanged.

use anyhow::Result;
use vaxtrial_db::kv::{MemoryWorldState, WorldState};
use vaxtrial_db::store::{ExperimentStore, RecordEncoding};

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Vaxtrial-DB Compressed Ledger Demo ===\n");

    let store =
        ExperimentStore::new(MemoryWorldState::new()).with_record_encoding(RecordEncoding::Lz4Json);

    store.initialize_ledger().await?;

    for key in ["EXP0", "EXP1", "EXP2"] {
        let experiment = store.query_experiment(key).await?;
        let plain = serde_json::to_vec(&experiment)?.len();
        let stored = store.state().get(key).await?.map_or(0, |bytes| bytes.len());
        println!(
            "{key}: {:<12} {plain} bytes plain JSON, {stored} bytes framed",
            experiment.vaccine_name()
        );
    }

    println!("\nDemo completed successfully!");
    Ok(())
}
