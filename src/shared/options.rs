//! Zentrale Konfiguration des Pfad-Glätters.
//!
//! `SmootherOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die Spline-Defaults kommen aus `nav_spline_engine`.

use nav_spline_engine::{SplineConfig, DEFAULT_SAMPLE_LENGTH};
use serde::{Deserialize, Serialize};

/// Dateiname der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "nav_path_smoother.toml";

/// Alle zur Laufzeit änderbaren Glättungs-Optionen.
/// Wird als `nav_path_smoother.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SmootherOptions {
    /// Abstand zwischen zwei Samples entlang der Bogenlänge (Welteinheiten)
    #[serde(default = "default_sample_length")]
    pub sample_length: f32,
    /// Spline-Aufbau (Exponent, LUT-Auflösung, Endpunkt-Modus, Limits)
    #[serde(default)]
    pub spline: SplineConfig,
}

impl Default for SmootherOptions {
    fn default() -> Self {
        Self {
            sample_length: DEFAULT_SAMPLE_LENGTH,
            spline: SplineConfig::default(),
        }
    }
}

/// Serde-Default für `sample_length` (Abwärtskompatibilität).
fn default_sample_length() -> f32 {
    DEFAULT_SAMPLE_LENGTH
}

impl SmootherOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungueltig, verwende Standardwerte: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Prüft Sample-Abstand und Spline-Konfiguration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.sample_length.is_finite() && self.sample_length > 0.0) {
            anyhow::bail!(
                "sample_length muss endlich und > 0 sein, war {}",
                self.sample_length
            );
        }
        self.spline.validate()?;
        Ok(())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("nav_path_smoother"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_spline_engine::EndpointMode;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("nav_path_smoother_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let opts = SmootherOptions::load_from_file(&temp_file("gibt_es_nicht.toml"));
        assert_eq!(opts, SmootherOptions::default());
        assert_eq!(opts.sample_length, 100.0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_file("roundtrip.toml");
        let mut opts = SmootherOptions::default();
        opts.sample_length = 25.0;
        opts.spline.endpoint_mode = EndpointMode::Anchor;
        opts.spline.lut_samples_per_segment = 8;

        opts.save_to_file(&path).expect("Speichern fehlgeschlagen");
        let loaded = SmootherOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let opts: SmootherOptions = toml::from_str("sample_length = 40.0").unwrap();
        assert_eq!(opts.sample_length, 40.0);
        assert_eq!(opts.spline, SplineConfig::default());

        let opts: SmootherOptions = toml::from_str("[spline]\nalpha = 1.0").unwrap();
        assert_eq!(opts.sample_length, DEFAULT_SAMPLE_LENGTH);
        assert_eq!(opts.spline.alpha, 1.0);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let path = temp_file("invalid.toml");
        std::fs::write(&path, "[spline]\nalpha = 3.0\n").unwrap();
        let opts = SmootherOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(opts, SmootherOptions::default());
    }

    #[test]
    fn test_non_positive_sample_length_falls_back_to_defaults() {
        for (name, content) in [
            ("zero_length.toml", "sample_length = 0.0\n"),
            ("negative_length.toml", "sample_length = -5.0\n"),
            ("nan_length.toml", "sample_length = nan\n"),
        ] {
            let path = temp_file(name);
            std::fs::write(&path, content).unwrap();
            let opts = SmootherOptions::load_from_file(&path);
            let _ = std::fs::remove_file(&path);
            assert_eq!(opts, SmootherOptions::default(), "Datei: {}", content);
        }
    }

    #[test]
    fn test_validate_checks_sample_length_and_spline() {
        assert!(SmootherOptions::default().validate().is_ok());

        let mut opts = SmootherOptions::default();
        opts.sample_length = 0.0;
        assert!(opts.validate().is_err());

        let mut opts = SmootherOptions::default();
        opts.spline.max_samples = usize::MAX;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let path = temp_file("broken.toml");
        std::fs::write(&path, "sample_length = \"viel\"").unwrap();
        let opts = SmootherOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(opts, SmootherOptions::default());
    }
}
