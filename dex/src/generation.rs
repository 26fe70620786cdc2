use serde::{Deserialize, Serialize};

/// Summary of one game generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationInfo {
    pub number: u8,
    pub region: String,
    #[serde(default)]
    pub games: Vec<String>,
    #[serde(default)]
    pub starters: Vec<String>,

    /// Species introduced in this generation
    #[serde(default)]
    pub count: u16,
}
