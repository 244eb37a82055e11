// crates/fcgrind-core/src/search/window.rs
//
// Field enumeration inside a single window of a single bit order.
//
// The scan is a finite lazy iterator rather than a materialized Vec: a
// window of length L has O(L^4) candidate field pairs, and most of them die
// on the known-FC or known-CN filter. Streaming keeps memory bounded by the
// survivors and gives callers a natural cancellation granularity.
//
// Field bounds follow the enumeration contract exactly:
//   fc_start in [0, L), fc_length in [1, L - fc_start)
//   cn_start in [0, L), cn_length in [1, L - cn_start)
// with overlapping (FC, CN) interval pairs skipped.

use crate::bits::{bits_to_value, BitOrder};
use crate::card::CardNumber;
use crate::search::matches::BitMatch;

/// Everything about the enclosing scan a single window needs.
#[derive(Clone, Copy)]
pub(crate) struct WindowCtx<'a> {
    pub card_name: &'a str,
    pub cn: CardNumber,
    pub bit_order: BitOrder,
    pub window_offset: usize,
    pub known_fc: Option<u64>,
}

/// Enumerate every admissible (FC, CN) field pair in `window`.
pub(crate) fn scan_window<'a>(
    window: &'a str,
    ctx: WindowCtx<'a>,
) -> impl Iterator<Item = BitMatch> + 'a {
    let len = window.len();

    (0..len)
        .flat_map(move |fc_start| {
            (1..len - fc_start).filter_map(move |fc_length| {
                let fc_bits = &window[fc_start..fc_start + fc_length];
                let fc_value = bits_to_value(fc_bits)?;
                if ctx.known_fc.is_some_and(|fc| fc != fc_value) {
                    return None;
                }
                Some((fc_start, fc_length, fc_bits, fc_value))
            })
        })
        .flat_map(move |(fc_start, fc_length, fc_bits, fc_value)| {
            (0..len).flat_map(move |cn_start| {
                (1..len - cn_start).filter_map(move |cn_length| {
                    let overlaps = !(fc_start + fc_length <= cn_start
                        || cn_start + cn_length <= fc_start);
                    if overlaps {
                        return None;
                    }

                    let cn_bits = &window[cn_start..cn_start + cn_length];
                    let cn_value = bits_to_value(cn_bits)?;
                    if let CardNumber::Known(cn) = ctx.cn {
                        if cn_value != cn {
                            return None;
                        }
                    }

                    Some(BitMatch {
                        bit_order: ctx.bit_order,
                        window_offset: ctx.window_offset,
                        window_length: len,
                        fc_start,
                        fc_length,
                        fc_value,
                        fc_bits: fc_bits.to_string(),
                        cn_start,
                        cn_length,
                        cn_value,
                        cn_bits: cn_bits.to_string(),
                        card_name: ctx.card_name.to_string(),
                    })
                })
            })
        })
}
