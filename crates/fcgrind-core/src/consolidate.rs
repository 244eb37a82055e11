// crates/fcgrind-core/src/consolidate.rs
//
// Cross-card consolidation: turns per-card match sets into facility-code
// candidates. Two policies:
//
// - known-CN: a pattern signature counts only if it shows up in EVERY card.
//   Candidates exist at consistency 1.0 or not at all.
// - unknown-CN: an FC value counts if enough cards contain it at all
//   (>= max(2, total/2)); its matches are the best-covering signature when
//   that signature reaches max(2, 4/5 of the contributing cards), otherwise
//   one representative match per card. Consistency is the fraction of cards
//   contributing.
//
// All grouping maps are keyed by ordered types (BTreeMap over fc values and
// signatures) and cards are walked in insertion order, so the same input
// always produces the same candidate list in the same order.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::search::matches::{BitMatch, PatternSignature};

/// Plausible facility-code range. Real deployments rarely use more than 16
/// bits of FC; values outside this band are noise from the brute force.
pub const FC_MIN: u64 = 1;
pub const FC_MAX: u64 = 65535;

pub fn plausible_fc(fc: u64) -> bool {
    (FC_MIN..=FC_MAX).contains(&fc)
}

/// A facility-code hypothesis with the evidence behind it.
#[derive(Clone, Debug)]
pub struct FcCandidate {
    pub fc_value: u64,
    pub matches: Vec<BitMatch>,
    /// Fraction of input cards confirming this FC, in [0, 1].
    pub consistency_score: f64,
    pub matched_format: Option<String>,
    pub format_boost: f64,
}

impl FcCandidate {
    pub(crate) fn new(fc_value: u64, matches: Vec<BitMatch>, consistency_score: f64) -> Self {
        FcCandidate {
            fc_value,
            matches,
            consistency_score,
            matched_format: None,
            format_boost: 0.0,
        }
    }

    /// Number of distinct cards represented in the evidence.
    pub fn card_count(&self) -> usize {
        let names: HashSet<&str> = self.matches.iter().map(|m| m.card_name.as_str()).collect();
        names.len()
    }

    /// Number of distinct pattern signatures represented in the evidence.
    pub fn pattern_count(&self) -> usize {
        let sigs: HashSet<PatternSignature> = self.matches.iter().map(|m| m.signature()).collect();
        sigs.len()
    }

    /// Signatures in the evidence, each with the matches carrying it, in
    /// first-seen order.
    pub fn patterns(&self) -> Vec<(PatternSignature, Vec<&BitMatch>)> {
        let mut order: Vec<PatternSignature> = Vec::new();
        let mut groups: HashMap<PatternSignature, Vec<&BitMatch>> = HashMap::new();
        for m in &self.matches {
            let sig = m.signature();
            groups
                .entry(sig)
                .or_insert_with(|| {
                    order.push(sig);
                    Vec::new()
                })
                .push(m);
        }
        order
            .into_iter()
            .map(|sig| {
                let ms = groups.remove(&sig).unwrap_or_default();
                (sig, ms)
            })
            .collect()
    }
}

fn group_by_fc(per_card: Vec<Vec<BitMatch>>) -> BTreeMap<u64, Vec<BitMatch>> {
    let mut groups: BTreeMap<u64, Vec<BitMatch>> = BTreeMap::new();
    for set in per_card {
        for m in set {
            groups.entry(m.fc_value).or_default().push(m);
        }
    }
    groups
}

/// Known-CN policy: every card's CN already filtered the enumeration, so a
/// candidate is credible only when some signature decodes the same FC out of
/// every single card.
pub fn known_cn_candidates(total_cards: usize, per_card: Vec<Vec<BitMatch>>) -> Vec<FcCandidate> {
    let mut out = Vec::new();

    for (fc_value, group) in group_by_fc(per_card) {
        if total_cards == 1 {
            // No cross-check possible; every match stands.
            out.push(FcCandidate::new(fc_value, group, 1.0));
            continue;
        }

        let valid = filter_consistent(&group);
        if valid.is_empty() {
            continue;
        }
        let names: HashSet<&str> = valid.iter().map(|m| m.card_name.as_str()).collect();
        // Full coverage or nothing; partial coverage is discarded, never
        // retained at a lower score.
        if names.len() == total_cards {
            out.push(FcCandidate::new(fc_value, valid, 1.0));
        }
    }

    out
}

/// Keep only the matches whose signature appears in every card present in
/// `group`. The first card in the group anchors the walk; each surviving
/// anchor match pulls in exactly one match per other card.
fn filter_consistent(group: &[BitMatch]) -> Vec<BitMatch> {
    let mut order: Vec<&str> = Vec::new();
    let mut anchor_matches: Vec<&BitMatch> = Vec::new();
    let mut by_card: HashMap<&str, HashMap<PatternSignature, &BitMatch>> = HashMap::new();

    for m in group {
        let name = m.card_name.as_str();
        if !by_card.contains_key(name) {
            order.push(name);
        }
        by_card.entry(name).or_default().insert(m.signature(), m);
        if name == order[0] {
            anchor_matches.push(m);
        }
    }

    let mut valid = Vec::new();
    'anchor: for am in anchor_matches {
        let sig = am.signature();
        let mut bundle = vec![am.clone()];
        for name in &order[1..] {
            match by_card[name].get(&sig) {
                Some(m) => bundle.push((*m).clone()),
                None => continue 'anchor,
            }
        }
        valid.extend(bundle);
    }
    valid
}

/// Unknown-CN policy: no CN filter constrained the enumeration for at least
/// one card, so the FC value itself carries the evidence. Gate on how many
/// cards contain it, then pick the best representative pattern.
pub fn unknown_cn_candidates(total_cards: usize, per_card: Vec<Vec<BitMatch>>) -> Vec<FcCandidate> {
    let mut out = Vec::new();
    let card_threshold = 2.max(total_cards / 2);

    for (fc_value, group) in group_by_fc(per_card) {
        if !plausible_fc(fc_value) {
            continue;
        }

        let mut cards_with_fc: Vec<&str> = Vec::new();
        for m in &group {
            let name = m.card_name.as_str();
            if !cards_with_fc.contains(&name) {
                cards_with_fc.push(name);
            }
        }
        if cards_with_fc.len() < card_threshold {
            continue;
        }

        let best = best_pattern_matches(&group, &cards_with_fc);
        if best.is_empty() {
            continue;
        }

        let consistency = cards_with_fc.len() as f64 / total_cards as f64;
        out.push(FcCandidate::new(fc_value, best, consistency));
    }

    out
}

/// Best evidence for one FC value: the signature covering the most cards if
/// it covers enough of them, else one representative match per card.
fn best_pattern_matches(group: &[BitMatch], cards_with_fc: &[&str]) -> Vec<BitMatch> {
    let mut sig_groups: BTreeMap<PatternSignature, Vec<&BitMatch>> = BTreeMap::new();
    for m in group {
        sig_groups.entry(m.signature()).or_default().push(m);
    }

    let mut best_coverage = 0usize;
    let mut best_matches: &[&BitMatch] = &[];
    for ms in sig_groups.values() {
        let covered: HashSet<&str> = ms.iter().map(|m| m.card_name.as_str()).collect();
        // Strictly greater: among equal coverage the lowest signature wins,
        // which keeps the winner stable across runs.
        if covered.len() > best_coverage {
            best_coverage = covered.len();
            best_matches = ms;
        }
    }

    let coverage_threshold = 2.max(cards_with_fc.len() * 4 / 5);
    if best_coverage >= coverage_threshold {
        return best_matches.iter().map(|m| (*m).clone()).collect();
    }

    // Fallback: the most format-like match of each card.
    let mut representative = Vec::with_capacity(cards_with_fc.len());
    for name in cards_with_fc {
        let mut best: Option<&BitMatch> = None;
        for m in group.iter().filter(|m| m.card_name == *name) {
            match best {
                // Strictly greater keeps the first maximal match, i.e. ties
                // beyond the stated criteria fall back to enumeration order.
                Some(b) if representative_key(m) <= representative_key(b) => {}
                _ => best = Some(m),
            }
        }
        if let Some(m) = best {
            representative.push(m.clone());
        }
    }
    representative
}

/// Fixed tie-break priority for the representative-match fallback, highest
/// first: format-like FC width, format-like CN width, forward bit order,
/// format-like window length.
fn representative_key(m: &BitMatch) -> (bool, bool, bool, bool) {
    (
        (8..=16).contains(&m.fc_length),
        (8..=24).contains(&m.cn_length),
        !m.bit_order.is_reversed(),
        (26..=37).contains(&m.window_length),
    )
}
