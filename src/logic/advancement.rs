//! Advancement graph: which match of round `k - 1` feeds which match of round `k`.

use crate::logic::rounds::Round;
use crate::models::Edge;

/// Indices in the previous round (of `previous` matches) feeding match `index` of a
/// round with `current` matches.
///
/// Uses the half-open range `[floor(i * p / c), floor((i + 1) * p / c))`, widened to at
/// least one index and clamped to the previous round. For an exact 2:1 ratio this is
/// `{2i, 2i + 1}`; whenever `previous >= current` the ranges partition the previous
/// round, so each earlier match feeds exactly one later match.
pub fn feeders(previous: usize, current: usize, index: usize) -> Vec<usize> {
    if previous == 0 || current == 0 || index >= current {
        return Vec::new();
    }
    let start = (index * previous / current).min(previous - 1);
    let end = ((index + 1) * previous / current).clamp(start + 1, previous);
    (start..end).collect()
}

/// Edges into every match of rounds `1..`, in round order then match order, then
/// feeder order. Round 0 has no incoming edges.
pub fn build_edges(rounds: &[Round<'_>], tag: Option<&str>) -> Vec<Edge> {
    let mut edges = Vec::new();
    for pair in rounds.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        for (index, target) in current.matches.iter().enumerate() {
            for source in feeders(previous.len(), current.len(), index) {
                edges.push(Edge::new(tag, &previous.matches[source].id, &target.id));
            }
        }
    }
    edges
}
