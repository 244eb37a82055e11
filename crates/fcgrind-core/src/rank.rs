// crates/fcgrind-core/src/rank.rs
//
// Composite scoring and top-N selection.
//
// Score composition:
//   100 * consistency
// +  50 * distinct card count
// + 100 flat if a known format matched, plus that format's boost
// + field-length bonus from the first match (FC: +20 in [8,16] else +10 in
//   [4,20]; CN: +10 in [8,24] else +5 in [4,32])
// -  50 if the FC value is outside the plausible range
// +  25 in unknown-CN mode when more than one card agrees and none of the
//   evidence came from a card whose CN was unknown

use std::collections::HashSet;

use crate::consolidate::{plausible_fc, FcCandidate};
use crate::params::SearchParams;

pub fn score_candidate(
    c: &FcCandidate,
    unknown_mode: bool,
    unknown_cn_cards: &HashSet<&str>,
) -> f64 {
    let mut score = c.consistency_score * 100.0;
    score += c.card_count() as f64 * 50.0;

    if c.matched_format.is_some() {
        score += 100.0;
    }
    score += c.format_boost;

    if let Some(m) = c.matches.first() {
        score += match m.fc_length {
            8..=16 => 20.0,
            4..=20 => 10.0,
            _ => 0.0,
        };
        score += match m.cn_length {
            8..=24 => 10.0,
            4..=32 => 5.0,
            _ => 0.0,
        };
    }

    if !plausible_fc(c.fc_value) {
        score -= 50.0;
    }

    if unknown_mode && c.card_count() > 1 {
        let fully_constrained = c
            .matches
            .iter()
            .all(|m| !unknown_cn_cards.contains(m.card_name.as_str()));
        if fully_constrained {
            score += 25.0;
        }
    }

    score
}

/// Restrict to a known FC if one is set, score, sort descending, cap.
/// The sort is stable, so equal scores keep the consolidator's FC order.
pub fn rank(
    candidates: Vec<FcCandidate>,
    params: &SearchParams,
    unknown_mode: bool,
    unknown_cn_cards: &HashSet<&str>,
) -> Vec<FcCandidate> {
    let mut scored: Vec<(f64, FcCandidate)> = candidates
        .into_iter()
        .filter(|c| params.known_fc.map_or(true, |fc| c.fc_value == fc))
        .map(|c| (score_candidate(&c, unknown_mode, unknown_cn_cards), c))
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .take(params.max_candidates)
        .map(|(_, c)| c)
        .collect()
}
