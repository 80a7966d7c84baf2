//! Bracket composition: partition, lay out and link each section, then merge into one diagram.

use crate::logic::advancement::{build_edges, feeders};
use crate::logic::layout::{layout_section, resolve_node_overlaps, SectionLayout};
use crate::logic::rounds::{partition, Partition};
use crate::models::{
    BracketError, BracketInput, Diagram, Edge, LayoutConfig, Match, Node, NodeData, Party, Point,
    SectionKind, Warning,
};
use std::collections::HashSet;

/// Id of the synthetic grand-final match in double elimination. Reserved.
pub const GRAND_FINAL_ID: &str = "grand-final";

/// Lay out a single-elimination bracket.
pub fn compute_single_elimination_layout(
    matches: &[Match],
    config: &LayoutConfig,
) -> Result<Diagram, BracketError> {
    ensure_unique_ids(matches.iter())?;
    let section = SectionKind::Single;
    let parted = partition(matches, config.round_sizes.as_deref(), section)?;
    let layout = layout_section(&parted.rounds, config.origin_x, 0.0, config);

    let mut diagram = Diagram::default();
    push_section(&mut diagram, section, &parted, &layout, config);
    ensure_no_label_collisions(&diagram)?;
    disambiguate_edge_ids(&mut diagram.edges);
    resolve_node_overlaps(&mut diagram.nodes, config.overlap_threshold);
    Ok(diagram)
}

/// Lay out a double-elimination bracket: winners on top, losers stacked below, and a
/// synthetic grand final to the right when both sections end in a single final.
pub fn compute_double_elimination_layout(
    winners: &[Match],
    losers: &[Match],
    config: &LayoutConfig,
) -> Result<Diagram, BracketError> {
    ensure_unique_ids(winners.iter().chain(losers.iter()))?;
    if let Some(m) = winners.iter().chain(losers.iter()).find(|m| m.id == GRAND_FINAL_ID) {
        return Err(BracketError::DuplicateMatchId { id: m.id.clone() });
    }

    let upper = partition(winners, config.round_sizes.as_deref(), SectionKind::Winners)?;
    let lower = partition(losers, config.losers_round_sizes.as_deref(), SectionKind::Losers)?;

    let upper_layout = layout_section(&upper.rounds, config.origin_x, 0.0, config);
    let lower_origin_y = upper_layout.max_y() + config.section_margin;
    let lower_layout = layout_section(&lower.rounds, config.origin_x, lower_origin_y, config);

    let mut diagram = Diagram::default();
    push_section(&mut diagram, SectionKind::Winners, &upper, &upper_layout, config);
    push_section(&mut diagram, SectionKind::Losers, &lower, &lower_layout, config);

    match (final_of(&upper), final_of(&lower)) {
        (Some(upper_final), Some(lower_final)) => {
            let upper_at = upper_layout.position_of(&upper_final.id).unwrap_or_default();
            let lower_at = lower_layout.position_of(&lower_final.id).unwrap_or_default();
            let x = upper_layout.max_x().max(lower_layout.max_x()) + config.x_spacing;
            let y = (upper_at.y + lower_at.y) / 2.0;
            let column = upper.rounds.len().max(lower.rounds.len());
            let at = Point::new(x, y);
            push_grand_final(&mut diagram, upper_final, lower_final, at, column, config);
        }
        _ => diagram.warnings.push(Warning::GrandFinalOmitted),
    }

    ensure_no_label_collisions(&diagram)?;
    disambiguate_edge_ids(&mut diagram.edges);
    resolve_node_overlaps(&mut diagram.nodes, config.overlap_threshold);
    Ok(diagram)
}

/// Dispatch on the shape of the input.
pub fn compute_layout(input: &BracketInput, config: &LayoutConfig) -> Result<Diagram, BracketError> {
    match input {
        BracketInput::Single(matches) => compute_single_elimination_layout(matches, config),
        BracketInput::Double { upper, lower } => {
            compute_double_elimination_layout(upper, lower, config)
        }
    }
}

fn ensure_unique_ids<'a>(matches: impl Iterator<Item = &'a Match>) -> Result<(), BracketError> {
    let mut seen = HashSet::new();
    for m in matches {
        if !seen.insert(m.id.as_str()) {
            return Err(BracketError::DuplicateMatchId { id: m.id.clone() });
        }
    }
    Ok(())
}

/// Match ids share one namespace with the generated label ids (`round-label-0`,
/// `winners-label`, `grand-final-label`, ...).
fn ensure_no_label_collisions(diagram: &Diagram) -> Result<(), BracketError> {
    let labels: HashSet<&str> = diagram.label_nodes().map(|n| n.id.as_str()).collect();
    match diagram.match_nodes().find(|n| labels.contains(n.id.as_str())) {
        Some(n) => Err(BracketError::ReservedId { id: n.id.clone() }),
        None => Ok(()),
    }
}

/// `{src}-{dst}` is ambiguous when ids contain `-`: `a-b`→`c` and `a`→`b-c` both give
/// `a-b-c`. Later duplicates get a `#n` suffix.
fn disambiguate_edge_ids(edges: &mut [Edge]) {
    let mut seen: HashSet<String> = HashSet::new();
    for edge in edges.iter_mut() {
        if seen.contains(&edge.id) {
            let mut n = 2;
            while seen.contains(&format!("{}#{}", edge.id, n)) {
                n += 1;
            }
            edge.id = format!("{}#{}", edge.id, n);
        }
        seen.insert(edge.id.clone());
    }
}

/// The section's final, unless its structure is ambiguous or it ends in several matches.
fn final_of<'a>(parted: &Partition<'a>) -> Option<&'a Match> {
    if parted.is_degraded() {
        return None;
    }
    parted.final_match()
}

fn prefixed(tag: Option<&str>, id: &str) -> String {
    match tag {
        Some(tag) => format!("{tag}-{id}"),
        None => id.to_string(),
    }
}

fn round_label(section: SectionKind, round: usize, count: usize, degraded: bool) -> String {
    if !degraded && round + 1 == count {
        section.final_label().to_string()
    } else {
        format!("Round {}", round + 1)
    }
}

fn section_title(section: SectionKind) -> Option<&'static str> {
    match section {
        SectionKind::Single => None,
        SectionKind::Winners => Some("Winners Bracket"),
        SectionKind::Losers => Some("Losers Bracket"),
    }
}

/// The party to show in a slot: the real one, else the winner of its feeder, else TBD.
fn display_party(party: Option<&Party>, feeder: Option<&Match>) -> Party {
    match (party, feeder) {
        (Some(party), _) => party.clone(),
        (None, Some(feeder)) => Party::named(format!("Winner {}", feeder.id)),
        (None, None) => Party::named("TBD"),
    }
}

/// Append a section's labels, match nodes and edges to the diagram.
fn push_section(
    diagram: &mut Diagram,
    section: SectionKind,
    parted: &Partition<'_>,
    layout: &SectionLayout<'_>,
    config: &LayoutConfig,
) {
    let tag = section.tag();
    if let Some(reason) = &parted.ambiguity {
        diagram.warnings.push(Warning::StructuralAmbiguity {
            section,
            reason: reason.clone(),
        });
    }

    if let (Some(title), Some(first)) = (section_title(section), layout.labels.first()) {
        let at = Point::new(first.x - config.x_spacing / 2.0, first.y);
        diagram.nodes.push(Node::label(prefixed(tag, "label"), at, title));
    }

    let count = layout.labels.len();
    for (round, at) in layout.labels.iter().enumerate() {
        diagram.nodes.push(Node::label(
            prefixed(tag, &format!("round-label-{round}")),
            *at,
            round_label(section, round, count, parted.is_degraded()),
        ));
    }

    for placement in &layout.matches {
        let sources: Vec<&Match> = match placement.round.checked_sub(1) {
            Some(previous) => {
                let previous = &parted.rounds[previous];
                let current = parted.rounds[placement.round].len();
                feeders(previous.len(), current, placement.index)
                    .into_iter()
                    .map(|i| previous.matches[i])
                    .collect()
            }
            None => Vec::new(),
        };
        let m = placement.payload;
        diagram.nodes.push(Node {
            id: m.id.clone(),
            position: placement.position,
            data: NodeData::Match {
                payload: m.clone(),
                top_party: display_party(m.top_party.as_ref(), sources.first().copied()),
                bottom_party: display_party(m.bottom_party.as_ref(), sources.get(1).copied()),
                section: Some(section),
                round: placement.round,
            },
        });
    }

    diagram.edges.extend(build_edges(&parted.rounds, tag));
}

fn push_grand_final(
    diagram: &mut Diagram,
    upper_final: &Match,
    lower_final: &Match,
    at: Point,
    column: usize,
    config: &LayoutConfig,
) {
    let top = Party::named("Winner of winners-final");
    let bottom = Party::named("Winner of losers-final");
    let payload = Match {
        top_party: Some(top.clone()),
        bottom_party: Some(bottom.clone()),
        ..Match::new(GRAND_FINAL_ID).with_name("Grand Final")
    };
    diagram.nodes.push(Node {
        id: GRAND_FINAL_ID.to_string(),
        position: at,
        data: NodeData::Match {
            payload,
            top_party: top,
            bottom_party: bottom,
            section: None,
            round: column,
        },
    });
    diagram.nodes.push(Node::label(
        prefixed(Some(GRAND_FINAL_ID), "label"),
        Point::new(at.x, config.label_y),
        "Grand Final",
    ));

    let tag = Some(GRAND_FINAL_ID);
    diagram.edges.push(Edge::new(tag, &upper_final.id, GRAND_FINAL_ID));
    diagram.edges.push(Edge::new(tag, &lower_final.id, GRAND_FINAL_ID));
}
