// crates/fcgrind-cli/src/render.rs
//
// Plain-text rendering of analysis results. The engine's structured output
// is the contract; this layer only formats it.

use fcgrind_core::{Analyzer, FcCandidate, UnknownCnReport};

pub fn print_run_header(analyzer: &Analyzer) {
    let p = analyzer.params();
    eprintln!("--- analyze ---");
    eprintln!("cards           = {}", analyzer.cards().len());
    eprintln!("window_bits     = {}..={}", p.min_bits, p.max_bits);
    if let Some(fc) = p.known_fc {
        eprintln!("known_fc        = {}", fc);
    }
    eprintln!(
        "cn_mode         = {}",
        if analyzer.unknown_cn_mode() {
            "unknown-cn"
        } else {
            "known-cn"
        }
    );
    for card in analyzer.cards() {
        eprintln!(
            "card {:<10} = {} (cn: {})",
            card.name,
            card.hex.to_uppercase(),
            card.cn
        );
    }
}

fn confidence_label(c: &FcCandidate) -> &'static str {
    if c.card_count() > 1 {
        "HIGH"
    } else if c.matched_format.is_some() {
        "KNOWN"
    } else {
        "SINGLE"
    }
}

pub fn print_summary(candidates: &[FcCandidate]) {
    println!("--- candidates ---");
    for (i, c) in candidates.iter().enumerate() {
        let format_info = match &c.matched_format {
            Some(name) => format!(" ({name})"),
            None => String::new(),
        };
        println!(
            "#{:>2} FC {:<6} matches={:<5} cards={} patterns={:<4} consistency={:.2} conf={}{}",
            i + 1,
            c.fc_value,
            c.matches.len(),
            c.card_count(),
            c.pattern_count(),
            c.consistency_score,
            confidence_label(c),
            format_info
        );
    }
}

pub fn print_details(c: &FcCandidate) {
    println!();
    println!("=== FC {} ===", c.fc_value);
    println!(
        "{} matches, {} cards, {} patterns",
        c.matches.len(),
        c.card_count(),
        c.pattern_count()
    );
    match &c.matched_format {
        Some(name) => println!("matched format  = {} (+{})", name, c.format_boost),
        None => println!("matched format  = none"),
    }

    for (i, (sig, matches)) in c.patterns().into_iter().enumerate() {
        println!("pattern #{}: {}", i + 1, sig);
        for m in matches {
            println!("  {:<12} FC={} CN={}", m.card_name, m.fc_bits, m.cn_bits);
        }
    }
}

pub fn print_report(r: &UnknownCnReport) {
    eprintln!("--- unknown-cn report ---");
    eprintln!("total_cards     = {}", r.total_cards);
    eprintln!("unknown_cn      = {}", r.unknown_cn_cards);
    eprintln!("distinct_fc     = {}", r.distinct_fc_values);
    for (fc, count) in &r.top_fc_values {
        eprintln!("fc {:<6}       count={}", fc, count);
    }
    for (pattern, count) in &r.top_patterns {
        eprintln!("pattern {:<24} count={}", pattern, count);
    }
}
