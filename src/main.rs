use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;
use log::info;

mod common;
mod gpl;
mod helpers;
mod persist;
mod render;
mod state;

/// Generate the 64-color Sega Master System palette as a PNG swatch image
/// and a GIMP palette (.gpl) file.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Directory that receives the generated files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Also write the palette as JSON
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> Result<()> {
    let dir = &args.output_dir;
    ensure!(
        dir.is_dir(),
        "Output directory {} does not exist",
        dir.display()
    );

    let image = render::render_palette();
    persist::save_png(dir, &image)?;
    persist::save_gpl(dir)?;
    if args.json {
        persist::save_palette_json(dir, &state::Palette::default())?;
    }
    info!("Done.");
    Ok(())
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run(&args)
}
