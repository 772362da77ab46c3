pub mod champions;
pub mod config;
pub mod display;
pub mod error;
pub mod store;

use champions::images::{BuildReport, ChampionImages};
use config::Config;
use display::output::{display_info, display_report};
use error::AppError;

/// Reads the champion list, builds every thumbnail URL, then writes the mapping.
/// The output file is only touched once the whole mapping exists.
pub fn generate(config: &Config) -> Result<BuildReport, AppError> {
    display_info(&format!(
        "Loading champions from {}",
        config.champions_path.display()
    ));
    let champions = store::load_champions(&config.champions_path)?;
    display_info(&format!("Found {} champion names", champions.len()));

    let images = ChampionImages::from_names(&champions);
    store::save_champion_images(&config.output_path, &images)?;

    let report = images.report(champions.len());
    display_report(&report, &config.output_path);

    Ok(report)
}
