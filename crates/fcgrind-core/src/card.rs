// crates/fcgrind-core/src/card.rs

use crate::bits::hex_to_bits;
use crate::error::Result;

/// A credential's card number: either supplied by the operator or unknown.
///
/// Deliberately a sum type, not a magic integer. CN 0 is a legitimate value
/// on some badge stock and must never collide with "we don't know".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardNumber {
    Known(u64),
    Unknown,
}

impl CardNumber {
    pub fn is_unknown(self) -> bool {
        matches!(self, CardNumber::Unknown)
    }
}

impl std::fmt::Display for CardNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardNumber::Known(v) => write!(f, "{v}"),
            CardNumber::Unknown => write!(f, "unknown"),
        }
    }
}

/// One credential under analysis. Immutable once built.
#[derive(Clone, Debug)]
pub struct Card {
    pub hex: String,
    pub cn: CardNumber,
    pub name: String,
}

impl Card {
    /// Build a card, validating the payload up front so a malformed hex
    /// string aborts the run before any enumeration starts.
    pub fn new(hex: &str, cn: CardNumber, name: String) -> Result<Self> {
        hex_to_bits(hex)?;
        Ok(Card {
            hex: hex.to_string(),
            cn,
            name,
        })
    }
}
