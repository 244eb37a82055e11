// crates/fcgrind-core/src/search/matches.rs

use crate::bits::BitOrder;

/// One admissible (window, FC field, CN field) placement inside a card's
/// bitstream, together with the values it decodes to. Immutable once built.
///
/// Invariant: the FC and CN intervals never overlap
/// (`fc_start + fc_length <= cn_start || cn_start + cn_length <= fc_start`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitMatch {
    pub bit_order: BitOrder,
    pub window_offset: usize,
    pub window_length: usize,
    pub fc_start: usize,
    pub fc_length: usize,
    pub fc_value: u64,
    pub fc_bits: String,
    pub cn_start: usize,
    pub cn_length: usize,
    pub cn_value: u64,
    pub cn_bits: String,
    pub card_name: String,
}

impl BitMatch {
    /// The structural identity of this placement, independent of the values
    /// it extracts. Two cards encoded the same way produce matches with
    /// equal signatures even though their FC/CN bits differ.
    pub fn signature(&self) -> PatternSignature {
        PatternSignature {
            bit_order: self.bit_order,
            window_offset: self.window_offset,
            window_length: self.window_length,
            fc_start: self.fc_start,
            fc_length: self.fc_length,
            cn_start: self.cn_start,
            cn_length: self.cn_length,
        }
    }
}

/// The 7-tuple naming an encoding scheme. Ord so grouping maps iterate in a
/// stable, input-independent order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternSignature {
    pub bit_order: BitOrder,
    pub window_offset: usize,
    pub window_length: usize,
    pub fc_start: usize,
    pub fc_length: usize,
    pub cn_start: usize,
    pub cn_length: usize,
}

impl std::fmt::Display for PatternSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}b@{}{} FC{}@{} CN{}@{}",
            self.window_length,
            self.window_offset,
            if self.bit_order.is_reversed() { "r" } else { "" },
            self.fc_length,
            self.fc_start,
            self.cn_length,
            self.cn_start,
        )
    }
}
