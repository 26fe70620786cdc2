use rotom_chart::{ChartError, TypeError};
use thiserror::Error;

/// Errors raised while building a knowledge base
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Malformed knowledge base: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read knowledge base: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid typing for {entity}: {source}")]
    Typing {
        entity: String,
        #[source]
        source: TypeError,
    },

    #[error("Unknown type name in type chart: {0}")]
    ChartType(#[source] TypeError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("Unknown region \"{region}\" on {entity}")]
    UnknownRegion { entity: String, region: String },

    #[error("Duplicate entity key: {0}")]
    Duplicate(String),

    #[error("Entity name normalizes to an empty key: {0:?}")]
    EmptyKey(String),
}
