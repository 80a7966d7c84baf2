//! Layout configuration. Every field has a default; unknown keys are ignored.

use serde::{Deserialize, Serialize};

/// Spacing model and optional explicit round plans.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Explicit round sizes for the single-elimination section or the winners section.
    /// Bypasses the round heuristics when set.
    pub round_sizes: Option<Vec<usize>>,
    /// Explicit round sizes for the losers section.
    pub losers_round_sizes: Option<Vec<usize>>,
    /// x of the first round column.
    pub origin_x: f64,
    /// Horizontal distance between round columns.
    pub x_spacing: f64,
    /// Vertical distance between matches of one round.
    pub y_spacing: f64,
    /// y of the round-label row, relative to the section's vertical origin.
    pub label_y: f64,
    /// Gap between the label row and the first match of the widest round.
    pub label_offset: f64,
    /// Gap between stacked sections.
    pub section_margin: f64,
    /// Two nodes closer than this on both axes are moved apart. Defaults to 100, half of
    /// `y_spacing`: at 300 every default column would count as colliding. Set it to 300 to
    /// force the wider separation.
    pub overlap_threshold: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            round_sizes: None,
            losers_round_sizes: None,
            origin_x: 100.0,
            x_spacing: 400.0,
            y_spacing: 200.0,
            label_y: 50.0,
            label_offset: 150.0,
            section_margin: 200.0,
            overlap_threshold: 100.0,
        }
    }
}

impl LayoutConfig {
    /// Same spacing, with an explicit plan for the single/winners section.
    pub fn with_round_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.round_sizes = Some(sizes);
        self
    }

    pub fn with_losers_round_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.losers_round_sizes = Some(sizes);
        self
    }
}
