// crates/fcgrind-cli/src/io/catalog.rs
//
// Format catalog loading. The catalog is optional reference data: a missing
// or unreadable file degrades to the empty catalog so analysis still runs,
// just without known-format scoring.

use anyhow::{Context, Result};
use serde::Deserialize;

use fcgrind_core::{FormatCatalog, FormatTemplate, Tolerance};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    formats: Vec<FormatEntry>,
    #[serde(default)]
    tolerance: Option<ToleranceEntry>,
}

#[derive(Debug, Deserialize)]
struct FormatEntry {
    name: String,
    total_bits: usize,
    fc_bits: usize,
    cn_bits: usize,
    fc_position: usize,
    cn_position: usize,
    #[serde(default)]
    confidence_boost: f64,
}

#[derive(Debug, Deserialize)]
struct ToleranceEntry {
    bit_length: usize,
    position: usize,
}

/// Load a catalog, substituting the empty catalog on any failure.
pub fn load_or_empty(path: &str) -> FormatCatalog {
    load(path).unwrap_or_else(|_| FormatCatalog::empty())
}

/// Strict load for `catalog` inspection, where a broken file should be
/// reported rather than papered over.
pub fn load(path: &str) -> Result<FormatCatalog> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read catalog {path}"))?;
    let file: CatalogFile =
        serde_json::from_str(&text).with_context(|| format!("parse catalog {path}"))?;

    let tolerance = match file.tolerance {
        Some(t) => Tolerance {
            bit_length: t.bit_length,
            position: t.position,
        },
        None => Tolerance::default(),
    };

    Ok(FormatCatalog {
        formats: file
            .formats
            .into_iter()
            .map(|f| FormatTemplate {
                name: f.name,
                total_bits: f.total_bits,
                fc_bits: f.fc_bits,
                cn_bits: f.cn_bits,
                fc_position: f.fc_position,
                cn_position: f.cn_position,
                confidence_boost: f.confidence_boost,
            })
            .collect(),
        tolerance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_degrades_to_empty() {
        let catalog = load_or_empty("/definitely/not/here.json");
        assert!(catalog.is_empty());
        assert_eq!(catalog.tolerance.bit_length, 2);
        assert_eq!(catalog.tolerance.position, 3);
    }
}
