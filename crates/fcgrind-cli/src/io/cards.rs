// crates/fcgrind-cli/src/io/cards.rs
//
// Card file loading. A card file is a JSON array (or one bare object) of
//   {"hex_data": "27bafc0864", "known_cn": 32443, "name": "garage"}
// where known_cn may also be the string "unknown" or be absent entirely,
// both meaning the CN is not known. A malformed file aborts the run.

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use fcgrind_core::CardNumber;

#[derive(Debug, Deserialize)]
pub struct CardRecord {
    pub hex_data: String,
    #[serde(default)]
    pub known_cn: Option<CnField>,
    #[serde(default)]
    pub name: Option<String>,
}

/// The CN slot as it appears on disk: a number, or the literal "unknown".
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CnField {
    Number(u64),
    Text(String),
}

impl CardRecord {
    pub fn card_number(&self) -> Result<CardNumber> {
        match &self.known_cn {
            None => Ok(CardNumber::Unknown),
            Some(CnField::Number(v)) => Ok(CardNumber::Known(*v)),
            Some(CnField::Text(s)) if s.eq_ignore_ascii_case("unknown") || s == "?" => {
                Ok(CardNumber::Unknown)
            }
            Some(CnField::Text(s)) => {
                bail!("known_cn must be an integer or \"unknown\", got {s:?}")
            }
        }
    }
}

pub fn load_cards(path: &str) -> Result<Vec<CardRecord>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read cards {path}"))?;
    parse_cards(&text).with_context(|| format!("parse cards {path}"))
}

fn parse_cards(text: &str) -> Result<Vec<CardRecord>> {
    // Accept either a list of records or a single bare record.
    let value: serde_json::Value = serde_json::from_str(text)?;
    let records = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_and_bare_object_both_parse() {
        let list = parse_cards(r#"[{"hex_data":"F0","known_cn":0}]"#).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].card_number().unwrap(), CardNumber::Known(0));

        let one = parse_cards(r#"{"hex_data":"F0"}"#).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].card_number().unwrap(), CardNumber::Unknown);
    }

    #[test]
    fn unknown_markers_accepted() {
        let cards = parse_cards(
            r#"[{"hex_data":"F0","known_cn":"unknown"},{"hex_data":"F1","known_cn":"?"}]"#,
        )
        .unwrap();
        for c in &cards {
            assert_eq!(c.card_number().unwrap(), CardNumber::Unknown);
        }
    }

    #[test]
    fn junk_cn_is_an_error() {
        let cards = parse_cards(r#"[{"hex_data":"F0","known_cn":"twelve"}]"#).unwrap();
        assert!(cards[0].card_number().is_err());
    }
}
