//! Fatal input errors and non-fatal structural warnings.

use crate::models::bracket_match::SectionKind;
use serde::{Deserialize, Serialize};

/// Input rejected at the boundary. No diagram is produced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// A section has no matches.
    EmptySection { section: SectionKind },
    /// Two matches share an id (within a section, across sections, or with the grand final).
    DuplicateMatchId { id: String },
    /// Explicit round plan does not add up to the number of matches.
    RoundPlanMismatch {
        section: SectionKind,
        planned: usize,
        actual: usize,
    },
    /// Explicit round plan contains a round with no matches.
    EmptyPlannedRound { section: SectionKind, round: usize },
    /// A match id equals the id of a generated label node.
    ReservedId { id: String },
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::EmptySection { section } => write!(f, "The {} has no matches", section),
            BracketError::DuplicateMatchId { id } => write!(f, "Match id '{}' is used more than once", id),
            BracketError::RoundPlanMismatch {
                section,
                planned,
                actual,
            } => write!(
                f,
                "Round sizes for the {} sum to {} but it has {} matches",
                section, planned, actual
            ),
            BracketError::EmptyPlannedRound { section, round } => {
                write!(f, "Round {} of the {} round plan is empty", round + 1, section)
            }
            BracketError::ReservedId { id } => {
                write!(f, "Match id '{}' is reserved for a diagram label", id)
            }
        }
    }
}

impl std::error::Error for BracketError {}

/// Why round membership could not be recovered from the match data.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ambiguity {
    /// No match has both parties, so there is no opening round to anchor on.
    NoOpeningRound,
    /// A match with both parties follows a match that is still undetermined.
    SeededLaterRound { id: String },
}

impl std::fmt::Display for Ambiguity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ambiguity::NoOpeningRound => write!(f, "no match has both parties set"),
            Ambiguity::SeededLaterRound { id } => {
                write!(f, "match '{}' has both parties but follows undetermined matches", id)
            }
        }
    }
}

/// Non-fatal condition attached to a diagram. The diagram is still valid.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Warning {
    /// The section was laid out as a single round.
    StructuralAmbiguity {
        section: SectionKind,
        reason: Ambiguity,
    },
    /// Double elimination without a grand final because a section did not reach a single final.
    GrandFinalOmitted,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::StructuralAmbiguity { section, reason } => write!(
                f,
                "The {} is incomplete or unrecognized ({}); showing all matches as one round",
                section, reason
            ),
            Warning::GrandFinalOmitted => {
                write!(f, "Grand final omitted: both brackets must end in a single final match")
            }
        }
    }
}
