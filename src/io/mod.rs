//! Pfad-Dateien im JSON-Format.
//!
//! Format: `{ "points": [[x, y, z], ...], "valid": true }`; `valid` ist optional.

use crate::path::NavPath;
use anyhow::{Context, Result};
use std::path::Path;

/// Parst einen Pfad aus JSON.
pub fn parse_nav_path(json: &str) -> Result<NavPath> {
    let path: NavPath =
        serde_json::from_str(json).context("Pfad-Datei ist kein gueltiges JSON-Pfadformat")?;
    if let Some(index) = path.points.iter().position(|p| !p.is_finite()) {
        anyhow::bail!("Wegpunkt {} enthaelt keine endlichen Koordinaten", index);
    }
    Ok(path)
}

/// Serialisiert einen Pfad als formatiertes JSON.
pub fn write_nav_path(path: &NavPath) -> Result<String> {
    Ok(serde_json::to_string_pretty(path)?)
}

/// Lädt einen Pfad aus einer Datei.
pub fn load_nav_path(file: &Path) -> Result<NavPath> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Fehler beim Lesen der Pfad-Datei: {}", file.display()))?;
    let path = parse_nav_path(&content)
        .with_context(|| format!("Fehler beim Parsen der Pfad-Datei: {}", file.display()))?;
    log::info!(
        "Pfad geladen aus {}: {} Wegpunkte",
        file.display(),
        path.points.len()
    );
    Ok(path)
}

/// Speichert einen Pfad als JSON-Datei.
pub fn save_nav_path(path: &NavPath, file: &Path) -> Result<()> {
    let content = write_nav_path(path)?;
    std::fs::write(file, content)
        .with_context(|| format!("Fehler beim Schreiben der Pfad-Datei: {}", file.display()))?;
    log::info!("Pfad gespeichert nach: {}", file.display());
    Ok(())
}
