//! Write every catalogued design, plus a 24 inch spec sheet, to `output/`.
//!
//! Usage: `cargo run --example generate_all [config.ron]`
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use usps_flags_rs::catalog;
use usps_flags_rs::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(Path::new(&path))
            .with_context(|| format!("loading config from {}", path))?,
        None => Config::new(),
    };
    let out_dir = PathBuf::from("output");
    fs::create_dir_all(&out_dir)?;

    let mut written = 0;
    for result in catalog::generate_all(&config) {
        let generated = match result {
            Ok(generated) => generated,
            Err(_) => continue,
        };
        let path = out_dir.join(format!("{}.svg", generated.event.design.slug()));
        fs::write(&path, &generated.markup)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!(
            "{} -> {} ({} bytes)",
            generated.title,
            path.display(),
            generated.event.bytes
        );
        written += 1;
    }

    let sheet = FlagRequest::new()
        .design(Design::SpecSheet {
            fly: Measure::from_integer(24),
            unit: "in".to_string(),
        })
        .scale(Measure::from_integer(6))
        .generate(&config)?;
    let path = out_dir.join(format!("{}.svg", sheet.event.design.slug()));
    fs::write(&path, &sheet.markup)?;
    log::info!("{} -> {}", sheet.title, path.display());

    log::info!("wrote {} designs to {}", written + 1, out_dir.display());
    Ok(())
}
