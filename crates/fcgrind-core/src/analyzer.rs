// crates/fcgrind-core/src/analyzer.rs
//
// The engine façade: holds the cards, search parameters and format catalog
// for one run, and drives enumerate -> consolidate -> score -> rank.
//
// Everything is a pure batch computation. Cards are immutable once added,
// every derived structure is rebuilt from scratch on each call, and the
// same input always yields the same ranked output.

use std::collections::{BTreeMap, HashSet};

use crate::card::{Card, CardNumber};
use crate::consolidate::{known_cn_candidates, unknown_cn_candidates, FcCandidate};
use crate::error::Result;
use crate::formats::FormatCatalog;
use crate::params::SearchParams;
use crate::rank;
use crate::search::enumerate::{all_card_matches, card_matches};
use crate::validate::validate_params;

pub struct Analyzer {
    params: SearchParams,
    catalog: FormatCatalog,
    cards: Vec<Card>,
    card_counter: usize,
}

impl Analyzer {
    pub fn new(params: SearchParams, catalog: FormatCatalog) -> Result<Self> {
        validate_params(&params)?;
        Ok(Analyzer {
            params,
            catalog,
            cards: Vec::new(),
            card_counter: 0,
        })
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Add one card. Unnamed cards get `Card_001`, `Card_002`, ... in
    /// insertion order; the payload is validated here so a malformed card
    /// fails the run before any enumeration happens.
    pub fn add_card(&mut self, hex: &str, cn: CardNumber, name: Option<String>) -> Result<&mut Self> {
        let name = match name {
            Some(n) => n,
            None => {
                self.card_counter += 1;
                format!("Card_{:03}", self.card_counter)
            }
        };
        let card = Card::new(hex, cn, name)?;
        self.cards.push(card);
        Ok(self)
    }

    pub fn add_cards<I>(&mut self, cards: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (String, CardNumber, Option<String>)>,
    {
        for (hex, cn, name) in cards {
            self.add_card(&hex, cn, name)?;
        }
        Ok(self)
    }

    /// Whether the unknown-CN consolidation policy applies to this run.
    pub fn unknown_cn_mode(&self) -> bool {
        self.params.assume_unknown_cn || self.cards.iter().any(|c| c.cn.is_unknown())
    }

    /// Every candidate surviving consolidation, format-scored but unranked.
    pub fn candidates(&self) -> Result<Vec<FcCandidate>> {
        if self.cards.is_empty() {
            return Ok(Vec::new());
        }

        let per_card = all_card_matches(&self.cards, &self.params)?;

        let mut candidates = if self.unknown_cn_mode() {
            unknown_cn_candidates(self.cards.len(), per_card)
        } else {
            known_cn_candidates(self.cards.len(), per_card)
        };

        for c in &mut candidates {
            self.catalog.apply(c);
        }

        Ok(candidates)
    }

    /// The ranked top-N candidate list: the engine's output contract.
    pub fn best_candidates(&self) -> Result<Vec<FcCandidate>> {
        let candidates = self.candidates()?;
        let unknown_cn_cards = self.unknown_cn_card_names();
        Ok(rank::rank(
            candidates,
            &self.params,
            self.unknown_cn_mode(),
            &unknown_cn_cards,
        ))
    }

    fn unknown_cn_card_names(&self) -> HashSet<&str> {
        self.cards
            .iter()
            .filter(|c| c.cn.is_unknown())
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Insight summary over the cards whose CN is unknown: which FC values
    /// and pattern shapes dominate their raw match sets. `None` when every
    /// card has a known CN.
    pub fn unknown_cn_report(&self) -> Result<Option<UnknownCnReport>> {
        let unknown_cards: Vec<&Card> = self.cards.iter().filter(|c| c.cn.is_unknown()).collect();
        if unknown_cards.is_empty() {
            return Ok(None);
        }

        let mut fc_counts: BTreeMap<u64, usize> = BTreeMap::new();
        let mut pattern_counts: BTreeMap<String, usize> = BTreeMap::new();
        for card in &unknown_cards {
            for m in card_matches(card, &self.params)? {
                *fc_counts.entry(m.fc_value).or_default() += 1;
                *pattern_counts.entry(m.signature().to_string()).or_default() += 1;
            }
        }

        let distinct_fc_values = fc_counts.len();
        Ok(Some(UnknownCnReport {
            total_cards: self.cards.len(),
            unknown_cn_cards: unknown_cards.len(),
            distinct_fc_values,
            top_fc_values: top_n(fc_counts, 10),
            top_patterns: top_n(pattern_counts, 5),
        }))
    }
}

/// What the brute force sees across the unknown-CN cards, before any
/// consolidation: the most frequent FC values and pattern shapes.
#[derive(Clone, Debug)]
pub struct UnknownCnReport {
    pub total_cards: usize,
    pub unknown_cn_cards: usize,
    pub distinct_fc_values: usize,
    /// Top 10 FC values by raw match count, descending.
    pub top_fc_values: Vec<(u64, usize)>,
    /// Top 5 pattern shapes by raw match count, descending.
    pub top_patterns: Vec<(String, usize)>,
}

fn top_n<K: Ord>(counts: BTreeMap<K, usize>, n: usize) -> Vec<(K, usize)> {
    let mut rows: Vec<(K, usize)> = counts.into_iter().collect();
    // Descending by count; the BTreeMap already ordered keys, and the sort
    // is stable, so ties stay in key order.
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.truncate(n);
    rows
}
