//! Global identities for coreference-scoring participants.
//!
//! A participant in a document-level entity can be an ERE entity, a value-like
//! filler, or something in the system output that aligns to nothing in the ERE.
//! Global identifiers across all three are formed by joining the type name and
//! the within-type ID with a hyphen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{QaError, QaResult};

/// The kind of scoring participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoringEntityType {
    Entity,
    ValueFiller,
    UnalignedToERE,
}

impl ScoringEntityType {
    pub const ALL: [ScoringEntityType; 3] = [
        ScoringEntityType::Entity,
        ScoringEntityType::ValueFiller,
        ScoringEntityType::UnalignedToERE,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScoringEntityType::Entity => "Entity",
            ScoringEntityType::ValueFiller => "ValueFiller",
            ScoringEntityType::UnalignedToERE => "UnalignedToERE",
        }
    }
}

impl fmt::Display for ScoringEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A checked `(type, within-type ID)` pair; equality and hashing cover both fields.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawScoringCorefId")]
pub struct ScoringCorefId {
    scoring_entity_type: ScoringEntityType,
    within_type_id: String,
}

#[derive(Deserialize)]
struct RawScoringCorefId {
    scoring_entity_type: ScoringEntityType,
    within_type_id: String,
}

impl TryFrom<RawScoringCorefId> for ScoringCorefId {
    type Error = QaError;

    fn try_from(raw: RawScoringCorefId) -> Result<Self, Self::Error> {
        ScoringCorefId::new(raw.scoring_entity_type, raw.within_type_id)
    }
}

impl ScoringCorefId {
    /// Fails with [`QaError::EmptyWithinTypeId`] if `within_type_id` is empty.
    pub fn new(
        scoring_entity_type: ScoringEntityType,
        within_type_id: impl Into<String>,
    ) -> QaResult<Self> {
        let within_type_id = within_type_id.into();
        if within_type_id.is_empty() {
            return Err(QaError::EmptyWithinTypeId {
                entity_type: scoring_entity_type.name().to_string(),
            });
        }
        Ok(Self {
            scoring_entity_type,
            within_type_id,
        })
    }

    pub fn scoring_entity_type(&self) -> ScoringEntityType {
        self.scoring_entity_type
    }

    pub fn within_type_id(&self) -> &str {
        &self.within_type_id
    }

    pub fn global_id(&self) -> String {
        global_id(self.scoring_entity_type, &self.within_type_id)
    }
}

/// `type-name + "-" + within_type_id`.
pub fn global_id(scoring_entity_type: ScoringEntityType, within_type_id: &str) -> String {
    format!("{}-{}", scoring_entity_type.name(), within_type_id)
}

impl fmt::Display for ScoringCorefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.scoring_entity_type, self.within_type_id)
    }
}

impl FromStr for ScoringCorefId {
    type Err = QaError;

    /// Parses a global ID. The type name never contains a hyphen, so the first
    /// hyphen separates it from the within-type ID, which may.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (type_name, within_type_id) = s
            .split_once('-')
            .ok_or_else(|| QaError::MalformedGlobalId(s.to_string()))?;
        let scoring_entity_type = ScoringEntityType::ALL
            .into_iter()
            .find(|t| t.name() == type_name)
            .ok_or_else(|| QaError::MalformedGlobalId(s.to_string()))?;
        ScoringCorefId::new(scoring_entity_type, within_type_id)
    }
}
