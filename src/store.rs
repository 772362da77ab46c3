use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::champions::images::ChampionImages;
use crate::champions::wikitext::extract_champions;
use crate::error::AppError;

pub fn load_champions(path: &Path) -> Result<Vec<String>, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::ReadError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        AppError::JsonError(format!("Failed to parse {}: {}", path.display(), e))
    })
}

pub fn save_champion_images(path: &Path, images: &ChampionImages) -> Result<(), AppError> {
    write_pretty(path, images)
}

pub fn save_champions(path: &Path, champions: &[String]) -> Result<(), AppError> {
    write_pretty(path, champions)
}

/// Extracts champion rows from a saved wiki page and writes them as the champion
/// list. Returns the number of names written.
pub fn refresh_champion_list(wikitext_path: &Path, champions_path: &Path) -> Result<usize, AppError> {
    let wikitext = fs::read_to_string(wikitext_path).map_err(|e| {
        AppError::ReadError(format!("Failed to read {}: {}", wikitext_path.display(), e))
    })?;

    let champions = extract_champions(&wikitext);
    save_champions(champions_path, &champions)?;

    Ok(champions.len())
}

// Serialized in full before the file is touched.
fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        AppError::JsonError(format!("Failed to serialize {}: {}", path.display(), e))
    })?;

    fs::write(path, json).map_err(|e| {
        AppError::WriteError(format!("Failed to write {}: {}", path.display(), e))
    })?;

    Ok(())
}
