use serde::{Deserialize, Serialize};

/// Selects the benchmark rules, score weighting, and catalog sequence for an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    Consumer,
    Business,
}

impl ProfileKind {
    pub const fn ordered() -> [Self; 2] {
        [Self::Consumer, Self::Business]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Consumer => "Consumer",
            Self::Business => "Business",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "consumer" | "personal" => Some(Self::Consumer),
            "business" => Some(Self::Business),
            _ => None,
        }
    }
}

/// Account categories that together make a complete credit mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CreditCategory {
    Revolving,
    Installment,
    Mortgage,
    Auto,
}

impl CreditCategory {
    pub const ALL: [Self; 4] = [
        Self::Revolving,
        Self::Installment,
        Self::Mortgage,
        Self::Auto,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Revolving => "Revolving",
            Self::Installment => "Installment",
            Self::Mortgage => "Mortgage",
            Self::Auto => "Auto",
        }
    }

    /// Case-insensitive lookup of a canonical category label.
    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(value))
    }
}
