//! fixture-runner: headless fixture generator for attribution tests.
//!
//! No command-line surface: the seed, output directory, and scale
//! are fixed configuration baked into the run. Writes raw_events.csv,
//! conversions.csv, and ad_spend.csv plus a manifest.json, then
//! prints a row-count summary.

use anyhow::Result;
use funnel_core::{
    assembler::DatasetAssembler,
    config::GeneratorConfig,
    rng::RngBank,
    sink::CsvFileSink,
};
use std::fs;
use std::path::Path;

const SEED: u64 = 42;
const OUT_DIR: &str = "./output";

#[derive(serde::Serialize)]
struct RunManifest {
    seed: u64,
    user_count: usize,
    tables: Vec<TableCount>,
}

#[derive(serde::Serialize)]
struct TableCount {
    name: String,
    rows: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let config = GeneratorConfig::default();
    println!("funnel fixtures — fixture-runner");
    println!("  seed:    {SEED}");
    println!("  users:   {}", config.user_count);
    println!("  window:  {} days from {}", config.window_days, config.anchor_date);
    println!("  out:     {OUT_DIR}");
    println!();

    let assembler = DatasetAssembler::new(config.clone());
    let dataset = assembler.assemble(&RngBank::new(SEED));

    let mut sink = CsvFileSink::new(OUT_DIR);
    let counts = assembler.emit(&dataset, &mut sink)?;

    write_manifest(Path::new(OUT_DIR), &config, &counts)?;
    print_summary(&counts);
    Ok(())
}

fn write_manifest(
    out_dir: &Path,
    config: &GeneratorConfig,
    counts: &[(&'static str, usize)],
) -> Result<()> {
    let manifest = RunManifest {
        seed: SEED,
        user_count: config.user_count,
        tables: counts
            .iter()
            .map(|(name, rows)| TableCount {
                name: name.to_string(),
                rows: *rows,
            })
            .collect(),
    };
    let path = out_dir.join("manifest.json");
    fs::write(&path, serde_json::to_string_pretty(&manifest)?)?;
    log::info!("wrote manifest to {}", path.display());
    Ok(())
}

fn print_summary(counts: &[(&'static str, usize)]) {
    println!("=== RUN SUMMARY ===");
    for (name, rows) in counts {
        println!("  {name}.csv: {rows} rows");
    }
}
