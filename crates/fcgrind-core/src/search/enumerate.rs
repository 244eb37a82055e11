// crates/fcgrind-core/src/search/enumerate.rs
//
// Per-card match set construction: both bit orders, every window length in
// [min_bits, max_bits] that fits the stream, every offset.

use rayon::prelude::*;

use crate::bits::{hex_to_bits, reverse_bits, BitOrder};
use crate::card::Card;
use crate::error::Result;
use crate::params::SearchParams;
use crate::search::matches::BitMatch;
use crate::search::window::{scan_window, WindowCtx};

/// The complete match set for one card.
pub fn card_matches(card: &Card, params: &SearchParams) -> Result<Vec<BitMatch>> {
    let forward = hex_to_bits(&card.hex)?;
    let mut out = Vec::new();

    for bit_order in BitOrder::BOTH {
        let stream = match bit_order {
            BitOrder::Forward => forward.clone(),
            BitOrder::Reversed => reverse_bits(&forward),
        };

        let top = params.max_bits.min(stream.len());
        for window_length in params.min_bits..=top {
            for window_offset in 0..=(stream.len() - window_length) {
                let window = &stream[window_offset..window_offset + window_length];
                let ctx = WindowCtx {
                    card_name: &card.name,
                    cn: card.cn,
                    bit_order,
                    window_offset,
                    known_fc: params.known_fc,
                };
                out.extend(scan_window(window, ctx));
            }
        }
    }

    Ok(out)
}

/// Match sets for every card, in card order.
///
/// Each card's enumeration is independent, so the work fans out across the
/// rayon pool; the collect is the single barrier the consolidator needs.
pub fn all_card_matches(cards: &[Card], params: &SearchParams) -> Result<Vec<Vec<BitMatch>>> {
    cards
        .par_iter()
        .map(|card| card_matches(card, params))
        .collect()
}
