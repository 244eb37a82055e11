// crates/fcgrind-core/src/params.rs

/// Caller-supplied search configuration.
///
/// The window range is the cost knob: per window of length L the field scan
/// is O(L^4), multiplied across both bit orders and every offset of every
/// window length in [min_bits, max_bits]. The engine always completes the
/// exhaustive search; it never truncates silently.
#[derive(Clone, Debug)]
pub struct SearchParams {
    /// Smallest window length tried, in bits.
    pub min_bits: usize,
    /// Largest window length tried, in bits.
    pub max_bits: usize,
    /// If set, only fields decoding to exactly this facility code are kept.
    pub known_fc: Option<u64>,
    /// Cap on the ranked candidate list.
    pub max_candidates: usize,
    /// Force the unknown-CN consolidation policy even if every card has a
    /// known CN. The policy is also selected automatically as soon as any
    /// card's CN is unknown.
    pub assume_unknown_cn: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            min_bits: 32,
            max_bits: 35,
            known_fc: None,
            max_candidates: 5,
            assume_unknown_cn: false,
        }
    }
}
