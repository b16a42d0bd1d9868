use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use field_plot::loader::read_angle_grid;
use field_plot::present;
use field_plot::quiver::field_arrows;
use field_plot::render::{CanvasLayout, render_field};

const OUTPUT_DIR: &str = "figs";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a direction-field CSV as a quiver plot",
    long_about = None
)]
struct Args {
    /// Field CSV of radian angles, one grid row per line
    field: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();

    let field = read_angle_grid(&args.field)
        .with_context(|| format!("failed to load {}", args.field.display()))?;
    info!(
        "Loaded {} ({} rows x {} cols)",
        args.field.display(),
        field.rows(),
        field.cols()
    );

    let arrows = field_arrows(&field);
    let layout = CanvasLayout::new(field.cols(), field.rows());

    fs::create_dir_all(OUTPUT_DIR)?;
    let output = output_path(&args.field);
    render_field(&arrows, layout, &output)?;
    info!("Wrote {}", output.display());

    present::show(&output)?;
    Ok(())
}

/// `figs/<input stem>_quiver.png`
fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "field".to_string());
    Path::new(OUTPUT_DIR).join(format!("{stem}_quiver.png"))
}
