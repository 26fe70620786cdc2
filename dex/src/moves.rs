//! Move metadata: priority moves and speed control

use std::fmt;

use rotom_chart::Type;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveCategory::Physical => "Physical",
            MoveCategory::Special => "Special",
            MoveCategory::Status => "Status",
        };
        write!(f, "{}", name)
    }
}

/// A move with non-zero priority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityMove {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    pub category: MoveCategory,
    #[serde(default)]
    pub power: Option<u16>,
    pub priority: i8,
    #[serde(default)]
    pub effect: Option<String>,
}

/// A move or mechanic that manipulates turn order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedControl {
    pub name: String,
    pub effect: String,
    pub priority: i8,
}
