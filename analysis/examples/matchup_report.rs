//! Print answers for a handful of queries.
//!
//! Usage: cargo run -p rotom-analysis --example matchup_report -- <pokemon> [attacking-type]

use anyhow::{Context, Result};
use rotom_analysis::{Engine, Query};
use rotom_dex::KnowledgeBase;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "Garchomp".to_string());
    let attacker = args.next();

    let kb = KnowledgeBase::bundled().context("Failed to load bundled knowledge base")?;
    let engine = Engine::new(&kb);

    let entity = kb
        .registry
        .find(&name)
        .with_context(|| format!("No Pokémon named {name:?}"))?;

    let mut queries = vec![
        Query::entity(&name),
        Query::Counters(entity.types),
        Query::Strategy(name.clone()),
    ];
    if let Some(attacker) = attacker {
        let defenders = entity.types.to_string();
        queries.push(Query::type_matchup(&attacker, &defenders)?);
    }

    for query in &queries {
        println!("{}\n", engine.answer(query).render());
    }

    Ok(())
}
