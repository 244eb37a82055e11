// crates/fcgrind-core/src/formats.rs
//
// Known real-world format catalog and the scorer matching candidate
// evidence against it. The catalog is plain data: loading it from a file is
// the front end's job, and a missing or broken catalog file simply becomes
// an empty one here (scoring then never matches and never errors).

use crate::consolidate::FcCandidate;
use crate::search::matches::BitMatch;

/// Symmetric integer tolerances applied to every template comparison.
#[derive(Clone, Copy, Debug)]
pub struct Tolerance {
    pub bit_length: usize,
    pub position: usize,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            bit_length: 2,
            position: 3,
        }
    }
}

/// One named real-world bit layout, e.g. the 26-bit H10301 scheme.
#[derive(Clone, Debug)]
pub struct FormatTemplate {
    pub name: String,
    pub total_bits: usize,
    pub fc_bits: usize,
    pub cn_bits: usize,
    pub fc_position: usize,
    pub cn_position: usize,
    pub confidence_boost: f64,
}

#[derive(Clone, Debug, Default)]
pub struct FormatCatalog {
    pub formats: Vec<FormatTemplate>,
    pub tolerance: Tolerance,
}

impl FormatCatalog {
    pub fn empty() -> Self {
        FormatCatalog::default()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Does this match line up with the template, within tolerance?
    fn hits(&self, m: &BitMatch, fmt: &FormatTemplate) -> bool {
        let t = self.tolerance;
        m.window_length.abs_diff(fmt.total_bits) <= t.bit_length
            && m.fc_length.abs_diff(fmt.fc_bits) <= t.bit_length
            && m.cn_length.abs_diff(fmt.cn_bits) <= t.bit_length
            && m.fc_start.abs_diff(fmt.fc_position) <= t.position
            && m.cn_start.abs_diff(fmt.cn_position) <= t.position
    }

    /// Record the best-fitting template on the candidate. Among all hits
    /// across all of the candidate's matches the highest confidence boost
    /// wins; no hit leaves the candidate untouched.
    pub fn apply(&self, candidate: &mut FcCandidate) {
        let mut best: Option<(&FormatTemplate, f64)> = None;

        for m in &candidate.matches {
            for fmt in &self.formats {
                if !self.hits(m, fmt) {
                    continue;
                }
                let better = match best {
                    Some((_, boost)) => fmt.confidence_boost > boost,
                    None => true,
                };
                if better {
                    best = Some((fmt, fmt.confidence_boost));
                }
            }
        }

        if let Some((fmt, boost)) = best {
            candidate.matched_format = Some(fmt.name.clone());
            candidate.format_boost = boost;
        }
    }
}
