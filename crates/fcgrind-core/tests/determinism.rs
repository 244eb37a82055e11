use std::collections::HashSet;

use fcgrind_core::card::CardNumber;
use fcgrind_core::rank::score_candidate;
use fcgrind_core::{Analyzer, FcCandidate, FormatCatalog, FormatTemplate, SearchParams, Tolerance};

fn build() -> Analyzer {
    let params = SearchParams {
        min_bits: 8,
        max_bits: 10,
        ..SearchParams::default()
    };
    let catalog = FormatCatalog {
        formats: vec![FormatTemplate {
            name: "toy 10-bit".into(),
            total_bits: 10,
            fc_bits: 4,
            cn_bits: 4,
            fc_position: 0,
            cn_position: 5,
            confidence_boost: 25.0,
        }],
        tolerance: Tolerance::default(),
    };
    let mut a = Analyzer::new(params, catalog).unwrap();
    a.add_card("9C42", CardNumber::Unknown, None).unwrap();
    a.add_card("9C43", CardNumber::Unknown, None).unwrap();
    a.add_card("9D40", CardNumber::Unknown, None).unwrap();
    a
}

fn fingerprint(candidates: &[FcCandidate]) -> Vec<(u64, usize, usize, String, String)> {
    candidates
        .iter()
        .map(|c| {
            (
                c.fc_value,
                c.matches.len(),
                c.pattern_count(),
                format!("{:.6}", c.consistency_score),
                c.matched_format.clone().unwrap_or_default(),
            )
        })
        .collect()
}

#[test]
fn identical_input_twice_yields_identical_output() {
    let a = build();
    let b = build();

    let ra = a.best_candidates().unwrap();
    let rb = b.best_candidates().unwrap();
    assert!(!ra.is_empty());
    assert_eq!(fingerprint(&ra), fingerprint(&rb));

    let unknowns: HashSet<&str> = a.cards().iter().map(|c| c.name.as_str()).collect();
    for (ca, cb) in ra.iter().zip(rb.iter()) {
        assert_eq!(
            score_candidate(ca, true, &unknowns),
            score_candidate(cb, true, &unknowns)
        );
        // Evidence lists must agree match for match, not just in size.
        assert_eq!(ca.matches, cb.matches);
    }
}

#[test]
fn repeated_calls_on_one_analyzer_agree() {
    let a = build();
    let first = a.best_candidates().unwrap();
    let second = a.best_candidates().unwrap();
    assert_eq!(fingerprint(&first), fingerprint(&second));
}
