use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BloomLevel {
    #[serde(rename = "LOTS")]
    Lots, // remember / understand / apply
    #[serde(rename = "HOTS")]
    Hots, // analyze / evaluate / create
}

impl fmt::Display for BloomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BloomLevel::Lots => write!(f, "LOTS"),
            BloomLevel::Hots => write!(f, "HOTS"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Classification {
    pub label: BloomLevel,
    pub confidence: f64,
}

impl Classification {
    /// Result for blank input; no embedding is computed.
    pub const DEFAULT: Classification = Classification {
        label: BloomLevel::Lots,
        confidence: 0.5,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DetailedClassification {
    pub classification: BloomLevel,
    pub confidence: f64,
    pub lots_score: f64,
    pub hots_score: f64,
    pub difference: f64,
}

impl DetailedClassification {
    pub const DEFAULT: DetailedClassification = DetailedClassification {
        classification: BloomLevel::Lots,
        confidence: 0.5,
        lots_score: 0.5,
        hots_score: 0.5,
        difference: 0.0,
    };

    pub fn summary(&self) -> Classification {
        Classification {
            label: self.classification,
            confidence: self.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bloom_level_serializes_as_uppercase_acronym() {
        assert_eq!(serde_json::to_string(&BloomLevel::Lots).unwrap(), "\"LOTS\"");
        assert_eq!(serde_json::to_string(&BloomLevel::Hots).unwrap(), "\"HOTS\"");
        assert_eq!(BloomLevel::Hots.to_string(), "HOTS");
    }

    #[test]
    fn bloom_level_rejects_unknown_label() {
        assert!(serde_json::from_str::<BloomLevel>("\"MOTS\"").is_err());
    }

    #[test]
    fn detailed_default_matches_blank_input_contract() {
        let detailed = DetailedClassification::DEFAULT;
        assert_eq!(detailed.summary(), Classification::DEFAULT);
        assert_eq!(detailed.difference, 0.0);
    }
}
