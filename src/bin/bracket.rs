//! Command-line front end: load a fixture, compute the diagram, print it as JSON.
//! Run with: cargo run --bin bracket -- fixtures/single_elimination.json
//! Config via env: BRACKET_CONFIG (path to a JSON config file), and per-field overrides
//! BRACKET_X_SPACING, BRACKET_Y_SPACING, BRACKET_OVERLAP_THRESHOLD.

use bracket_layout::{compute_layout, load_bracket, LayoutConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Config file (if any) first, then individual env overrides, then defaults.
fn load_config() -> Result<LayoutConfig, Box<dyn std::error::Error>> {
    let mut config = match std::env::var("BRACKET_CONFIG") {
        Ok(path) => {
            let file = std::fs::File::open(&path)?;
            log::info!("Using layout config from {}", path);
            serde_json::from_reader(file)?
        }
        Err(_) => LayoutConfig::default(),
    };
    if let Some(v) = env_f64("BRACKET_X_SPACING") {
        config.x_spacing = v;
    }
    if let Some(v) = env_f64("BRACKET_Y_SPACING") {
        config.y_spacing = v;
    }
    if let Some(v) = env_f64("BRACKET_OVERLAP_THRESHOLD") {
        config.overlap_threshold = v;
    }
    Ok(config)
}

fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let input = load_bracket(path)?;
    let diagram = compute_layout(&input, &config)?;

    for warning in &diagram.warnings {
        log::warn!("{}", warning);
    }
    log::info!(
        "Laid out {} nodes and {} edges from {}",
        diagram.nodes.len(),
        diagram.edges.len(),
        path.display()
    );

    println!("{}", serde_json::to_string_pretty(&diagram)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: bracket <fixture.json|fixture.csv>");
        return ExitCode::from(2);
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
