use serde::{Deserialize, Serialize};

/// The collection information statement an offer is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormVariant {
    /// Form 433-A (OIC), wage earners and self-employed individuals.
    Individual,
    /// Form 433-B (OIC), businesses.
    Business,
}

impl FormVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "433-A",
            Self::Business => "433-B",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "433-A" | "individual" => Some(Self::Individual),
            "433-B" | "business" => Some(Self::Business),
            _ => None,
        }
    }
}

impl std::fmt::Display for FormVariant {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "Form {}", self.as_str())
    }
}
