use std::collections::HashSet;

use fcgrind_core::bits::BitOrder;
use fcgrind_core::consolidate::FcCandidate;
use fcgrind_core::rank::{rank, score_candidate};
use fcgrind_core::{BitMatch, SearchParams};

fn mk(card: &str, fc_value: u64, fc_length: usize, cn_length: usize) -> BitMatch {
    BitMatch {
        bit_order: BitOrder::Forward,
        window_offset: 0,
        window_length: 26,
        fc_start: 0,
        fc_length,
        fc_value,
        fc_bits: "0".repeat(fc_length),
        cn_start: fc_length,
        cn_length,
        cn_value: 123,
        cn_bits: "0".repeat(cn_length),
        card_name: card.into(),
    }
}

fn candidate(fc_value: u64, matches: Vec<BitMatch>, consistency: f64) -> FcCandidate {
    FcCandidate {
        fc_value,
        matches,
        consistency_score: consistency,
        matched_format: None,
        format_boost: 0.0,
    }
}

fn no_unknowns() -> HashSet<&'static str> {
    HashSet::new()
}

#[test]
fn score_composition_adds_up() {
    // 1.0 consistency, 2 cards, format-like field widths, no format match:
    // 100 + 100 + 20 + 10 = 230.
    let c = candidate(
        9,
        vec![mk("a", 9, 8, 16), mk("b", 9, 8, 16)],
        1.0,
    );
    assert_eq!(score_candidate(&c, false, &no_unknowns()), 230.0);
}

#[test]
fn format_match_adds_flat_bonus_plus_boost() {
    let mut c = candidate(9, vec![mk("a", 9, 8, 16)], 1.0);
    let base = score_candidate(&c, false, &no_unknowns());
    c.matched_format = Some("H10301".into());
    c.format_boost = 50.0;
    assert_eq!(score_candidate(&c, false, &no_unknowns()), base + 150.0);
}

#[test]
fn marginal_field_widths_earn_the_smaller_bonus() {
    // FC 5 bits (in [4,20] but not [8,16]) and CN 30 bits (in [4,32] but
    // not [8,24]): +10 +5 instead of +20 +10.
    let wide = candidate(9, vec![mk("a", 9, 5, 30)], 1.0);
    let tight = candidate(9, vec![mk("a", 9, 8, 16)], 1.0);
    let w = score_candidate(&wide, false, &no_unknowns());
    let t = score_candidate(&tight, false, &no_unknowns());
    assert_eq!(t - w, 15.0);
}

#[test]
fn out_of_range_fc_is_penalized() {
    let ok = candidate(9, vec![mk("a", 9, 8, 16)], 1.0);
    let big = candidate(70000, vec![mk("a", 70000, 8, 16)], 1.0);
    let delta =
        score_candidate(&ok, false, &no_unknowns()) - score_candidate(&big, false, &no_unknowns());
    assert_eq!(delta, 50.0);
}

#[test]
fn unknown_mode_bonus_needs_multiple_fully_constrained_cards() {
    let multi = candidate(9, vec![mk("a", 9, 8, 16), mk("b", 9, 8, 16)], 1.0);
    let single = candidate(9, vec![mk("a", 9, 8, 16)], 1.0);

    // No card had an unknown CN: multi-card evidence earns +25.
    assert_eq!(
        score_candidate(&multi, true, &no_unknowns())
            - score_candidate(&multi, false, &no_unknowns()),
        25.0
    );
    // Single-card evidence never does.
    assert_eq!(
        score_candidate(&single, true, &no_unknowns()),
        score_candidate(&single, false, &no_unknowns())
    );
    // Evidence touching an unknown-CN card never does.
    let tainted: HashSet<&str> = ["b"].into_iter().collect();
    assert_eq!(
        score_candidate(&multi, true, &tainted),
        score_candidate(&multi, false, &no_unknowns())
    );
}

#[test]
fn rank_sorts_descending_and_truncates() {
    let params = SearchParams {
        min_bits: 8,
        max_bits: 16,
        max_candidates: 2,
        ..SearchParams::default()
    };
    let candidates = vec![
        candidate(1, vec![mk("a", 1, 1, 2)], 0.5),
        candidate(2, vec![mk("a", 2, 8, 16), mk("b", 2, 8, 16)], 1.0),
        candidate(3, vec![mk("a", 3, 8, 16)], 1.0),
    ];

    let ranked = rank(candidates, &params, false, &no_unknowns());
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].fc_value, 2);
    assert_eq!(ranked[1].fc_value, 3);
}

#[test]
fn rank_ties_keep_consolidation_order() {
    let params = SearchParams {
        min_bits: 8,
        max_bits: 16,
        ..SearchParams::default()
    };
    // Identical evidence shapes -> identical scores; the incoming (FC
    // ascending) order must survive the stable sort.
    let candidates = vec![
        candidate(10, vec![mk("a", 10, 8, 16)], 1.0),
        candidate(11, vec![mk("a", 11, 8, 16)], 1.0),
        candidate(12, vec![mk("a", 12, 8, 16)], 1.0),
    ];
    let ranked = rank(candidates, &params, false, &no_unknowns());
    let order: Vec<u64> = ranked.iter().map(|c| c.fc_value).collect();
    assert_eq!(order, vec![10, 11, 12]);
}

#[test]
fn known_fc_filter_applies_before_scoring() {
    let params = SearchParams {
        min_bits: 8,
        max_bits: 16,
        known_fc: Some(3),
        ..SearchParams::default()
    };
    let candidates = vec![
        candidate(2, vec![mk("a", 2, 8, 16), mk("b", 2, 8, 16)], 1.0),
        candidate(3, vec![mk("a", 3, 1, 2)], 0.5),
    ];
    let ranked = rank(candidates, &params, false, &no_unknowns());
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].fc_value, 3);
}
