//! Brute-force recovery of facility-code/card-number encodings from
//! fixed-format access credentials (Wiegand-style RFID payloads).
//!
//! Given hex payloads and, optionally, their known card numbers or a known
//! facility code, the engine enumerates every admissible (window, FC field,
//! CN field) placement across both bit orders, filters the results for
//! cross-card consistency, scores them against a catalog of real-world
//! formats, and returns a ranked candidate list.

pub mod analyzer;
pub mod bits;
pub mod card;
pub mod consolidate;
pub mod error;
pub mod formats;
pub mod params;
pub mod rank;
pub mod search;
pub mod validate;

pub use crate::analyzer::{Analyzer, UnknownCnReport};
pub use crate::bits::BitOrder;
pub use crate::card::{Card, CardNumber};
pub use crate::consolidate::FcCandidate;
pub use crate::error::{GrindError, Result};
pub use crate::formats::{FormatCatalog, FormatTemplate, Tolerance};
pub use crate::params::SearchParams;
pub use crate::search::{BitMatch, PatternSignature};
