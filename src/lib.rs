//! Tournament bracket structuring: infer rounds from a flat match list, lay them out in
//! 2D and derive which match feeds which, for single and double elimination.

pub mod fixtures;
pub mod logic;
pub mod models;

pub use fixtures::{load_bracket, read_matches_csv, read_matches_json, FixtureError};
pub use logic::{
    build_edges, compute_double_elimination_layout, compute_layout,
    compute_single_elimination_layout, feeders, layout_section, overlaps, partition,
    resolve_node_overlaps, resolve_overlaps, Partition, Round, SectionLayout, Strategy,
    GRAND_FINAL_ID,
};
pub use models::{
    Ambiguity, BracketError, BracketInput, Diagram, Edge, LayoutConfig, Match, Node, NodeData,
    Party, Point, SectionKind, Warning,
};
