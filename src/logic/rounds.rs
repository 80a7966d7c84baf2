//! Round partitioning: split a flat, ordered match list into rounds.
//!
//! Strategies, in order of preference:
//! 1. An explicit round plan supplied by the caller.
//! 2. Power of two: `len + 1` teams is a power of two, so rounds halve from `(len + 1) / 2`.
//! 3. Presence: matches with both parties form round 0, the rest (undetermined or
//!    half-filled by an advancing winner) are sliced into rounds of `ceil(previous / 2)`.
//! 4. Otherwise a single round holding every match, with an [`Ambiguity`] attached.

use crate::models::{Ambiguity, BracketError, Match, SectionKind};

/// Matches at the same structural depth, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct Round<'a> {
    pub matches: Vec<&'a Match>,
}

impl<'a> Round<'a> {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Ids of the matches in this round.
    pub fn ids(&self) -> Vec<&'a str> {
        self.matches.iter().map(|m| m.id.as_str()).collect()
    }
}

/// How the round structure was obtained.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    Explicit,
    PowerOfTwo,
    Presence,
    /// Nothing matched; all matches in one round.
    SingleRound,
}

/// Result of partitioning one section.
#[derive(Clone, Debug, PartialEq)]
pub struct Partition<'a> {
    pub rounds: Vec<Round<'a>>,
    pub strategy: Strategy,
    /// Set when the partition degraded to a single round.
    pub ambiguity: Option<Ambiguity>,
}

impl<'a> Partition<'a> {
    pub fn sizes(&self) -> Vec<usize> {
        self.rounds.iter().map(Round::len).collect()
    }

    pub fn total_matches(&self) -> usize {
        self.rounds.iter().map(Round::len).sum()
    }

    pub fn is_degraded(&self) -> bool {
        self.strategy == Strategy::SingleRound
    }

    /// Last round, if it holds exactly one match.
    pub fn final_match(&self) -> Option<&'a Match> {
        match self.rounds.last() {
            Some(round) if round.len() == 1 => Some(round.matches[0]),
            _ => None,
        }
    }
}

/// Split `matches` into rounds. `plan`, when given, is used as-is and must sum to the
/// number of matches. Ambiguous input is not an error: it yields a single round and an
/// [`Ambiguity`].
pub fn partition<'a>(
    matches: &'a [Match],
    plan: Option<&[usize]>,
    section: SectionKind,
) -> Result<Partition<'a>, BracketError> {
    if matches.is_empty() {
        return Err(BracketError::EmptySection { section });
    }

    if let Some(plan) = plan {
        validate_plan(plan, matches.len(), section)?;
        return Ok(Partition {
            rounds: slice_rounds(matches, plan),
            strategy: Strategy::Explicit,
            ambiguity: None,
        });
    }

    if let Some(sizes) = power_of_two_sizes(matches.len()) {
        return Ok(Partition {
            rounds: slice_rounds(matches, &sizes),
            strategy: Strategy::PowerOfTwo,
            ambiguity: None,
        });
    }

    match presence_sizes(matches) {
        Ok(sizes) => Ok(Partition {
            rounds: slice_rounds(matches, &sizes),
            strategy: Strategy::Presence,
            ambiguity: None,
        }),
        Err(reason) => Ok(Partition {
            rounds: vec![Round {
                matches: matches.iter().collect(),
            }],
            strategy: Strategy::SingleRound,
            ambiguity: Some(reason),
        }),
    }
}

fn validate_plan(plan: &[usize], actual: usize, section: SectionKind) -> Result<(), BracketError> {
    if let Some(round) = plan.iter().position(|&size| size == 0) {
        return Err(BracketError::EmptyPlannedRound { section, round });
    }
    let planned: usize = plan.iter().sum();
    if planned != actual {
        return Err(BracketError::RoundPlanMismatch {
            section,
            planned,
            actual,
        });
    }
    Ok(())
}

/// Round sizes for a complete bracket of `match_count + 1` teams, or None if that is not
/// a power of two.
pub fn power_of_two_sizes(match_count: usize) -> Option<Vec<usize>> {
    let teams = match_count.checked_add(1)?;
    if match_count == 0 || !teams.is_power_of_two() {
        return None;
    }
    let mut sizes = Vec::new();
    let mut size = teams / 2;
    while size >= 1 {
        sizes.push(size);
        size /= 2;
    }
    Some(sizes)
}

/// Round sizes recovered from which matches already have both parties.
///
/// Opening matches must form a prefix of the input. A match with one party counts as
/// a later match: its other slot waits on a winner.
pub fn presence_sizes(matches: &[Match]) -> Result<Vec<usize>, Ambiguity> {
    let opening = matches.iter().take_while(|m| m.has_both_parties()).count();
    if opening == 0 {
        return Err(Ambiguity::NoOpeningRound);
    }
    let later = &matches[opening..];
    if let Some(m) = later.iter().find(|m| m.has_both_parties()) {
        return Err(Ambiguity::SeededLaterRound { id: m.id.clone() });
    }

    let mut sizes = vec![opening];
    let mut remaining = later.len();
    let mut previous = opening;
    while remaining > 0 {
        let size = previous.div_ceil(2).min(remaining);
        sizes.push(size);
        remaining -= size;
        previous = size;
    }
    Ok(sizes)
}

/// Contiguous slices of `matches` with the given sizes. Sizes must sum to the length.
fn slice_rounds<'a>(matches: &'a [Match], sizes: &[usize]) -> Vec<Round<'a>> {
    let mut rounds = Vec::with_capacity(sizes.len());
    let mut start = 0;
    for &size in sizes {
        rounds.push(Round {
            matches: matches[start..start + size].iter().collect(),
        });
        start += size;
    }
    rounds
}
