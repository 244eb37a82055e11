use anyhow::Context;
use clap::Args;

use fcgrind_core::{Analyzer, CardNumber, SearchParams};

use crate::io;
use crate::render;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Add a card as HEX:CN[:NAME]; CN is an integer or "unknown"
    #[arg(short = 'c', long = "card")]
    pub card: Vec<String>,

    /// Load cards from a JSON file
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// Format catalog path (missing file = no known-format scoring)
    #[arg(long, default_value = "formats/hid_formats.json")]
    pub formats: String,

    /// Known facility code to search for
    #[arg(long)]
    pub known_fc: Option<u64>,

    /// Smallest window length in bits
    #[arg(long, default_value_t = 32)]
    pub min_bits: usize,

    /// Largest window length in bits
    #[arg(long, default_value_t = 35)]
    pub max_bits: usize,

    /// Cap on the ranked candidate list
    #[arg(long, default_value_t = 5)]
    pub max_candidates: usize,

    /// Use the unknown-CN policy even when every card has a CN
    #[arg(long, default_value_t = false)]
    pub assume_unknown_cn: bool,

    /// Print every pattern of every candidate
    #[arg(long, default_value_t = false)]
    pub details: bool,

    /// Print the unknown-CN insight summary after the candidates
    #[arg(long, default_value_t = false)]
    pub report: bool,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    if args.card.is_empty() && args.file.is_none() {
        anyhow::bail!("must supply at least one --card or a --file");
    }

    let params = SearchParams {
        min_bits: args.min_bits,
        max_bits: args.max_bits,
        known_fc: args.known_fc,
        max_candidates: args.max_candidates,
        assume_unknown_cn: args.assume_unknown_cn,
    };
    let catalog = io::catalog::load_or_empty(&args.formats);
    let mut analyzer = Analyzer::new(params, catalog)?;

    if let Some(file) = &args.file {
        for rec in io::cards::load_cards(file)? {
            let cn = rec.card_number()?;
            analyzer.add_card(&rec.hex_data, cn, rec.name.clone())?;
        }
    }
    for spec in &args.card {
        let (hex, cn, name) = parse_card_spec(spec)?;
        analyzer.add_card(&hex, cn, name)?;
    }

    render::print_run_header(&analyzer);

    let candidates = analyzer.best_candidates()?;
    if candidates.is_empty() {
        println!("no consistent encodings found");
    } else {
        render::print_summary(&candidates);
        if args.details {
            for c in &candidates {
                render::print_details(c);
            }
        }
    }

    if args.report {
        if let Some(r) = analyzer.unknown_cn_report()? {
            render::print_report(&r);
        }
    }

    Ok(())
}

fn parse_card_spec(spec: &str) -> anyhow::Result<(String, CardNumber, Option<String>)> {
    let mut parts = spec.splitn(3, ':');
    let hex = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow::anyhow!("card spec needs HEX:CN[:NAME], got {spec:?}"))?;
    let cn_raw = parts
        .next()
        .ok_or_else(|| anyhow::anyhow!("card spec needs HEX:CN[:NAME], got {spec:?}"))?;

    let cn = if cn_raw.eq_ignore_ascii_case("unknown") || cn_raw == "?" {
        CardNumber::Unknown
    } else {
        let v: u64 = cn_raw
            .parse()
            .with_context(|| format!("card CN must be an integer or \"unknown\", got {cn_raw:?}"))?;
        CardNumber::Known(v)
    };

    let name = parts.next().map(str::to_string);
    Ok((hex.to_string(), cn, name))
}
