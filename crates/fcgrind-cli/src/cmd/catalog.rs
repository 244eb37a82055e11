use clap::Args;

use crate::io;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog file to inspect
    #[arg(long, default_value = "formats/hid_formats.json")]
    pub file: String,
}

pub fn run(args: CatalogArgs) -> anyhow::Result<()> {
    // Strict load here: an operator inspecting a catalog wants to know it
    // is broken, unlike analyze which degrades to no format scoring.
    let catalog = io::catalog::load(&args.file)?;

    eprintln!("--- catalog ---");
    eprintln!("file            = {}", args.file);
    eprintln!("formats         = {}", catalog.formats.len());
    eprintln!(
        "tolerance       = bit_length {} / position {}",
        catalog.tolerance.bit_length, catalog.tolerance.position
    );

    for f in &catalog.formats {
        eprintln!(
            "{:<28} {:>3} bits  FC {:>2}@{:<3} CN {:>2}@{:<3} boost={}",
            f.name, f.total_bits, f.fc_bits, f.fc_position, f.cn_bits, f.cn_position, f.confidence_boost
        );
    }

    Ok(())
}
