//! Layout engine: grid placement of rounds and the overlap-resolution pass.

use crate::logic::rounds::Round;
use crate::models::{LayoutConfig, Match, Node, Point};

/// Position of one match within a laid-out section.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchPlacement<'a> {
    pub payload: &'a Match,
    pub round: usize,
    /// Position within the round.
    pub index: usize,
    pub position: Point,
}

/// Placement of every match and round label of one section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionLayout<'a> {
    /// Round by round, in input order.
    pub matches: Vec<MatchPlacement<'a>>,
    /// One label position per round column.
    pub labels: Vec<Point>,
}

impl<'a> SectionLayout<'a> {
    /// Match id to position.
    pub fn position_of(&self, id: &str) -> Option<Point> {
        self.matches
            .iter()
            .find(|p| p.payload.id == id)
            .map(|p| p.position)
    }

    /// Largest y used by any match or label of the section.
    pub fn max_y(&self) -> f64 {
        self.matches
            .iter()
            .map(|p| p.position)
            .chain(self.labels.iter().copied())
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Largest x used by any round column.
    pub fn max_x(&self) -> f64 {
        self.labels.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Lay out `rounds` on a grid.
///
/// Round `r` sits at `x = origin_x + r * x_spacing`. Every round is centred on a shared
/// axis `base_y = origin_y + label_y + label_offset + (widest - 1) * y_spacing / 2`, so the
/// widest round starts `label_offset` below the label row at `origin_y + label_y`.
pub fn layout_section<'a>(
    rounds: &[Round<'a>],
    origin_x: f64,
    origin_y: f64,
    config: &LayoutConfig,
) -> SectionLayout<'a> {
    let widest = rounds.iter().map(Round::len).max().unwrap_or(0);
    let label_y = origin_y + config.label_y;
    let base_y = label_y + config.label_offset + span(widest, config.y_spacing) / 2.0;

    let mut matches = Vec::new();
    let mut labels = Vec::with_capacity(rounds.len());
    for (round_index, round) in rounds.iter().enumerate() {
        let x = origin_x + round_index as f64 * config.x_spacing;
        let top = base_y - span(round.len(), config.y_spacing) / 2.0;
        for (index, payload) in round.matches.iter().copied().enumerate() {
            matches.push(MatchPlacement {
                payload,
                round: round_index,
                index,
                position: Point::new(x, top + index as f64 * config.y_spacing),
            });
        }
        labels.push(Point::new(x, label_y));
    }
    SectionLayout { matches, labels }
}

/// Distance from the first to the last of `count` evenly spaced items.
fn span(count: usize, spacing: f64) -> f64 {
    count.saturating_sub(1) as f64 * spacing
}

/// Whether two positions are closer than `threshold` on both axes.
pub fn overlaps(a: Point, b: Point, threshold: f64) -> bool {
    (a.x - b.x).abs() < threshold && (a.y - b.y).abs() < threshold
}

/// Move points down until none overlaps an earlier one. Returns how many points moved.
///
/// Points are visited in slice order and each colliding point is shifted by
/// `threshold` along y. The y coordinate only increases, and every earlier point blocks
/// an open interval of width `2 * threshold`, so a point is bumped at most twice per
/// earlier point. Running this on its own output moves nothing.
pub fn resolve_overlaps(points: &mut [Point], threshold: f64) -> usize {
    let mut moved = 0;
    for i in 1..points.len() {
        let (placed, rest) = points.split_at_mut(i);
        let point = &mut rest[0];
        let max_bumps = 2 * placed.len();
        let mut bumps = 0;
        while bumps < max_bumps && placed.iter().any(|p| overlaps(*p, *point, threshold)) {
            point.y += threshold;
            bumps += 1;
        }
        if bumps > 0 {
            moved += 1;
        }
    }
    moved
}

/// [`resolve_overlaps`] applied to node positions.
pub fn resolve_node_overlaps(nodes: &mut [Node], threshold: f64) -> usize {
    let mut points: Vec<Point> = nodes.iter().map(|n| n.position).collect();
    let moved = resolve_overlaps(&mut points, threshold);
    for (node, point) in nodes.iter_mut().zip(points) {
        node.position = point;
    }
    moved
}
