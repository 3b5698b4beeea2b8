//! Run every `samples/*.json` through the library and diff against the
//! sibling `.ts` file.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

fn run_sample(json_path: &Path) -> Result<bool> {
    let source = std::fs::read_to_string(json_path)
        .with_context(|| format!("failed to read {}", json_path.display()))?;
    let interfaces = json_to_ts::json_str_to_ts(&source)?;
    let actual = interfaces.join("\n\n");

    let expected_path = json_path.with_extension("ts");
    let expected = std::fs::read_to_string(&expected_path)
        .with_context(|| format!("failed to read {}", expected_path.display()))?;

    if actual.trim() == expected.trim() {
        return Ok(true)
    }
    eprintln!("{}", "—— expected ——".dimmed());
    eprintln!("{}", expected.trim().green());
    eprintln!("{}", "—— actual ——".dimmed());
    eprintln!("{}", actual.red());
    Ok(false)
}

fn main() -> Result<()> {
    let samples_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples");
    let pattern = samples_dir.join("*.json");
    let mut paths = glob::glob(&pattern.to_string_lossy())?.collect::<Result<Vec<_>, _>>()?;
    paths.sort();

    let mut failed = 0usize;
    for path in &paths {
        let name = path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
        match run_sample(path) {
            Ok(true) => eprintln!("✅ {name}"),
            Ok(false) => {
                failed += 1;
                eprintln!("❌ {name}");
            }
            Err(error) => {
                failed += 1;
                eprintln!("❌ {name}: {}", format!("{error:#}").red());
            }
        }
    }

    eprintln!("{} samples, {} failed", paths.len(), failed);
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
