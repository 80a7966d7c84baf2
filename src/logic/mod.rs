//! Bracket structuring: round partitioning, layout, advancement graph, composition.

mod advancement;
mod compose;
mod layout;
mod rounds;

pub use advancement::{build_edges, feeders};
pub use compose::{
    compute_double_elimination_layout, compute_layout, compute_single_elimination_layout,
    GRAND_FINAL_ID,
};
pub use layout::{
    layout_section, overlaps, resolve_node_overlaps, resolve_overlaps, MatchPlacement,
    SectionLayout,
};
pub use rounds::{partition, power_of_two_sizes, presence_sizes, Partition, Round, Strategy};
