use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use flow_field::config::Config;
use flow_field::export::export_field_csv;
use flow_field::flow::flow_field;
use flow_field::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate a flow field from a scenario map and export it as CSV",
    long_about = None
)]
struct Args {
    /// Scenario TOML file. When omitted, a built-in demo map is used.
    scenario: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let scenario = match &args.scenario {
        Some(path) => {
            info!("loading scenario from {}", path.display());
            Scenario::from_path(path)?
        }
        None => {
            info!("no scenario given, using the built-in demo map");
            Scenario::default()
        }
    };

    let (cost, targets) = scenario.build()?;
    let field = flow_field(&cost, &targets)?;
    let path = export_field_csv(&field, &config.output_dir)?;

    info!(
        "Wrote {} ({}x{} cells, {} walls, {} targets)",
        path.display(),
        cost.width(),
        cost.height(),
        scenario.walls.len(),
        targets.len()
    );
    Ok(())
}
