//! Diagram output: positioned nodes, advancement edges and warnings.

use crate::models::bracket_match::{Match, Party, SectionKind};
use crate::models::error::Warning;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A 2D coordinate in diagram space (y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What a node shows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeData {
    Match {
        payload: Match,
        /// Display party for the top slot; a placeholder when the match has none yet.
        top_party: Party,
        bottom_party: Party,
        /// Section this match belongs to; None for the synthetic grand final.
        #[serde(skip_serializing_if = "Option::is_none")]
        section: Option<SectionKind>,
        round: usize,
    },
    /// Round, section or grand-final caption.
    Label { label: String },
}

/// A positioned diagram node. Match nodes use the match id as node id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub position: Point,
    #[serde(flatten)]
    pub data: NodeData,
}

impl Node {
    pub fn label(id: impl Into<String>, position: Point, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position,
            data: NodeData::Label {
                label: label.into(),
            },
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self.data, NodeData::Match { .. })
    }

    /// The carried match, for match nodes.
    pub fn payload(&self) -> Option<&Match> {
        match &self.data {
            NodeData::Match { payload, .. } => Some(payload),
            NodeData::Label { .. } => None,
        }
    }
}

/// Directed advancement edge: the winner of `source` plays in `target`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    /// Edge ids are `{source}-{target}`, prefixed with the section tag when there is one.
    pub fn new(tag: Option<&str>, source: &str, target: &str) -> Self {
        let id = match tag {
            Some(tag) => format!("{tag}:{source}-{target}"),
            None => format!("{source}-{target}"),
        };
        Self {
            id,
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

/// Everything the rendering layer needs to draw one bracket.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

impl Diagram {
    /// Look up a node (match or label) by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Match nodes only, in layout order.
    pub fn match_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_match())
    }

    /// Label pseudo-nodes only, in layout order.
    pub fn label_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| !n.is_match())
    }

    /// Match id to position.
    pub fn match_positions(&self) -> HashMap<&str, Point> {
        self.match_nodes()
            .map(|n| (n.id.as_str(), n.position))
            .collect()
    }

    /// Edges ending at `target`, in emission order.
    pub fn incoming(&self, target: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.target == target).collect()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
