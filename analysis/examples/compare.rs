//! Compare two Pokémon head to head.
//!
//! Usage: cargo run -p rotom-analysis --example compare -- <left> <right> [thresholds.json]

use anyhow::{Context, Result, bail};
use rotom_analysis::{Answer, Engine, Query, RoleThresholds};
use rotom_dex::KnowledgeBase;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (left, right) = match args.as_slice() {
        [left, right, ..] => (left.clone(), right.clone()),
        _ => bail!("usage: compare <left> <right> [thresholds.json]"),
    };

    let thresholds = match args.get(2) {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {path}"))?;
            serde_json::from_str::<RoleThresholds>(&json)
                .with_context(|| format!("Invalid thresholds in {path}"))?
        }
        None => RoleThresholds::default(),
    };

    let kb = KnowledgeBase::bundled()?;
    let engine = Engine::new(&kb).with_thresholds(thresholds);
    info!(entities = kb.registry.len(), "Knowledge base ready");

    match engine.answer(&Query::compare(&left, &right)) {
        Answer::Unresolved(unresolved) => bail!(unresolved),
        answer => println!("{}\n", answer.render()),
    }

    for name in [&left, &right] {
        println!("{}\n", engine.answer(&Query::Strategy(name.clone())).render());
    }

    Ok(())
}
