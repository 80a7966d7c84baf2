//! Data structures for bracket layout: matches, configuration, diagram output, errors.

mod bracket_match;
mod config;
mod diagram;
mod error;

pub use bracket_match::{BracketInput, Match, Party, SectionKind};
pub use config::LayoutConfig;
pub use diagram::{Diagram, Edge, Node, NodeData, Point};
pub use error::{Ambiguity, BracketError, Warning};
