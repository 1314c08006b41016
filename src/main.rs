//! NavPath Smoother.
//!
//! Liest einen Navigationspfad (JSON), glättet ihn per zentripetalem
//! Catmull-Rom-Spline und schreibt die gleichabständigen Samples zurück.

use anyhow::{Context, Result};
use nav_path_smoother::cli::{CliArgs, USAGE};
use nav_path_smoother::{
    load_nav_path, save_nav_path, smooth_path, write_nav_path, SmootherOptions,
};

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("NavPath Smoother v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(SmootherOptions::config_path);
    let options = SmootherOptions::load_from_file(&config_path);
    let sample_length = args.sample_length.unwrap_or(options.sample_length);

    let path = load_nav_path(&args.input)?;
    let smoothed = smooth_path(&path, sample_length, &options.spline);
    log::info!(
        "Pfad geglaettet: {} → {} Wegpunkte (Abstand {})",
        path.points.len(),
        smoothed.points.len(),
        sample_length
    );

    match &args.output {
        Some(output) => save_nav_path(&smoothed, output)?,
        None => {
            let json =
                write_nav_path(&smoothed).context("Pfad konnte nicht serialisiert werden")?;
            println!("{}", json);
        }
    }
    Ok(())
}
