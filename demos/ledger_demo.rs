//! Experiment Ledger Demo
//!
//! Run with: `cargo run --example ledger_demo`
//!
//! Walks the full record protocol against the in-memory world state:
//! bulk initialization, create, append, and the two queries.

use anyhow::Result;
use vaxtrial_db::kv::MemoryWorldState;
use vaxtrial_db::record::Person;
use vaxtrial_db::store::{ExperimentDraft, ExperimentStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Vaxtrial-DB Ledger Demo ===\n");

    let store = ExperimentStore::new(MemoryWorldState::new());

    // 1. Bulk initialization
    println!("1. Initialize ledger");
    store.initialize_ledger().await?;
    for key in ["EXP0", "EXP1", "EXP2"] {
        let experiment = store.query_experiment(key).await?;
        println!(
            "   {key}: {} ({} researchers)",
            experiment.vaccine_name(),
            experiment.researchers().len()
        );
    }

    // 2. Create a new experiment
    println!("\n2. Create experiment EXP3");
    let draft = ExperimentDraft::new(
        "Oslo Institute of Immunology",
        "Challenge trial for seasonal rhinovirus",
        Person::new("Mari", "Holm", "NO-771"),
        "RHINO-24",
        "Common cold",
        "2024-Mar-11",
        "2024-Sep-30",
    );
    store.create_experiment("EXP3", draft).await?;
    println!("   created {}", store.query_experiment("EXP3").await?.vaccine_name());

    // 3. Grow the researcher list
    println!("\n3. Append researchers to EXP3");
    store
        .add_researcher("EXP3", Person::new("Ana", "Lee", "R-010"))
        .await?;
    store
        .add_researcher("EXP3", Person::new("Jonas", "Berg", "NO-802"))
        .await?;
    let experiment = store.query_experiment("EXP3").await?;
    for researcher in experiment.researchers() {
        println!("   {} {}", researcher.name(), researcher.surname());
    }

    // 4. Append and query conclusions
    println!("\n4. Append conclusions to EXP3");
    store
        .add_conclusion(
            "EXP3",
            Person::new("Ana", "Lee", "R-010"),
            "Cohort A seroconverted within 14 days.",
        )
        .await?;
    store
        .add_conclusion(
            "EXP3",
            Person::new("Mari", "Holm", "NO-771"),
            "No grade-3 adverse events observed.",
        )
        .await?;
    for conclusion in store.query_conclusions("EXP3").await? {
        println!(
            "   [{}] {} {}: {}",
            conclusion.created_at().format("%Y-%b-%d %H:%M:%S"),
            conclusion.author().name(),
            conclusion.author().surname(),
            conclusion.content()
        );
    }

    println!("\nDemo completed successfully!");
    Ok(())
}
