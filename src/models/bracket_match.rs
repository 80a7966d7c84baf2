//! Match, Party and the bracket input shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A participant reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_text: Option<String>,
}

impl Party {
    /// A party known only by its display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// A single match as supplied by the data source. Never mutated by the layout core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// None while the participant is not yet determined.
    #[serde(default)]
    pub top_party: Option<Party>,
    #[serde(default)]
    pub bottom_party: Option<Party>,
    /// Best-of count for the match itself (display only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_rounds: Option<u32>,
    /// Opaque result payload, carried through to the diagram.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_mapping: Option<Value>,
}

impl Match {
    /// Create a match with both parties still to be determined.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            top_party: None,
            bottom_party: None,
            number_of_rounds: None,
            state: None,
            score_mapping: None,
        }
    }

    /// Create a match between two named parties.
    pub fn between(id: impl Into<String>, top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            top_party: Some(Party::named(top)),
            bottom_party: Some(Party::named(bottom)),
            ..Self::new(id)
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Both parties are known: the match can only be an opening-round match.
    pub fn has_both_parties(&self) -> bool {
        self.top_party.is_some() && self.bottom_party.is_some()
    }

    /// Exactly one party is known (a bye or a half-filled later-round slot).
    pub fn has_single_party(&self) -> bool {
        self.top_party.is_some() != self.bottom_party.is_some()
    }
}

/// Which part of the bracket a sequence of matches belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// The only section of a single-elimination bracket.
    Single,
    Winners,
    Losers,
}

impl SectionKind {
    /// Prefix used to keep ids of generated nodes and edges unique across sections.
    /// Single elimination has one section and needs no prefix.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            SectionKind::Single => None,
            SectionKind::Winners => Some("winners"),
            SectionKind::Losers => Some("losers"),
        }
    }

    /// Label of the section's last round column.
    pub fn final_label(self) -> &'static str {
        match self {
            SectionKind::Single => "Final",
            SectionKind::Winners => "Winners Final",
            SectionKind::Losers => "Losers Final",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionKind::Single => write!(f, "bracket"),
            SectionKind::Winners => write!(f, "winners bracket"),
            SectionKind::Losers => write!(f, "losers bracket"),
        }
    }
}

/// Match data for one bracket, as loaded from a fixture or handed over by a caller.
///
/// A plain array is a single-elimination bracket; an object with upper and lower
/// arrays is a double-elimination bracket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BracketInput {
    Double {
        #[serde(alias = "winners")]
        upper: Vec<Match>,
        #[serde(alias = "losers")]
        lower: Vec<Match>,
    },
    Single(Vec<Match>),
}

impl BracketInput {
    /// Total number of matches over all sections.
    pub fn match_count(&self) -> usize {
        match self {
            BracketInput::Single(matches) => matches.len(),
            BracketInput::Double { upper, lower } => upper.len() + lower.len(),
        }
    }
}
