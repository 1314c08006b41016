//! Konfiguration des Spline-Aufbaus.
//!
//! `SplineConfig` bündelt alle Konstanten, die beim Aufbau und bei der
//! Auswertung verwendet werden. Die `const`-Werte dienen als Defaults.

use crate::error::SplineError;
use serde::{Deserialize, Serialize};

/// Zentripetaler Exponent für die Knoten-Parametrisierung (0.5 = zentripetal).
pub const DEFAULT_ALPHA: f32 = 0.5;
/// LUT-Intervalle pro nutzbarem Spline-Segment.
pub const DEFAULT_LUT_SAMPLES_PER_SEGMENT: usize = 32;
/// Abstand, unterhalb dessen aufeinanderfolgende Punkte als Duplikat gelten.
pub const DEFAULT_DUPLICATE_TOLERANCE: f32 = 1e-4;
/// Obergrenze für die Anzahl der Punkte beim gleichabständigen Resampling.
pub const DEFAULT_MAX_SAMPLES: usize = 100_000;
/// Standard-Abstand zwischen zwei Samples in Welteinheiten.
pub const DEFAULT_SAMPLE_LENGTH: f32 = 100.0;
/// Höchste erlaubte LUT-Auflösung pro Segment.
pub const MAX_LUT_SAMPLES_PER_SEGMENT: usize = 4096;
/// Höchster erlaubter Wert für `max_samples`.
pub const MAX_SAMPLES_LIMIT: usize = 10_000_000;

/// Behandlung der Pfad-Endpunkte beim Spline-Aufbau.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointMode {
    /// Phantom-Punkte vor dem ersten und nach dem letzten Punkt extrapolieren.
    /// Die Kurve läuft vom ersten bis zum letzten Eingabepunkt.
    #[default]
    Phantom,
    /// Erster und letzter Eingabepunkt dienen nur als Tangenten-Anker.
    /// Die Kurve läuft vom zweiten bis zum vorletzten Eingabepunkt.
    Anchor,
}

impl EndpointMode {
    /// Mindestanzahl nutzbarer Punkte (nach Duplikat-Bereinigung).
    pub fn min_points(self) -> usize {
        match self {
            EndpointMode::Phantom => 2,
            EndpointMode::Anchor => 4,
        }
    }
}

/// Parameter für Aufbau, LUT-Auflösung und Resampling eines Splines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineConfig {
    /// Exponent der Sehnenlänge (0.0 uniform, 0.5 zentripetal, 1.0 chordal)
    pub alpha: f32,
    /// Anzahl LUT-Intervalle je Segment (höher = genauere Distanz-Umkehrung)
    pub lut_samples_per_segment: usize,
    /// Endpunkt-Behandlung
    pub endpoint_mode: EndpointMode,
    /// Duplikat-Schwelle in Welteinheiten
    pub duplicate_tolerance: f32,
    /// Maximal erlaubte Punktanzahl für `equidistant_samples`
    pub max_samples: usize,
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            lut_samples_per_segment: DEFAULT_LUT_SAMPLES_PER_SEGMENT,
            endpoint_mode: EndpointMode::default(),
            duplicate_tolerance: DEFAULT_DUPLICATE_TOLERANCE,
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

impl SplineConfig {
    /// Setzt den Endpunkt-Modus (Builder-Stil).
    pub fn with_endpoint_mode(mut self, endpoint_mode: EndpointMode) -> Self {
        self.endpoint_mode = endpoint_mode;
        self
    }

    /// Setzt die LUT-Auflösung pro Segment (Builder-Stil).
    pub fn with_lut_samples_per_segment(mut self, samples: usize) -> Self {
        self.lut_samples_per_segment = samples;
        self
    }

    /// Setzt den Parametrisierungs-Exponenten (Builder-Stil).
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Prüft die Werte auf Plausibilität.
    pub fn validate(&self) -> Result<(), SplineError> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(SplineError::InvalidConfig(format!(
                "alpha muss in [0, 1] liegen, war {}",
                self.alpha
            )));
        }
        if !(1..=MAX_LUT_SAMPLES_PER_SEGMENT).contains(&self.lut_samples_per_segment) {
            return Err(SplineError::InvalidConfig(format!(
                "lut_samples_per_segment muss in [1, {}] liegen, war {}",
                MAX_LUT_SAMPLES_PER_SEGMENT, self.lut_samples_per_segment
            )));
        }
        if !(self.duplicate_tolerance >= 0.0 && self.duplicate_tolerance.is_finite()) {
            return Err(SplineError::InvalidConfig(format!(
                "duplicate_tolerance muss endlich und >= 0 sein, war {}",
                self.duplicate_tolerance
            )));
        }
        if !(2..=MAX_SAMPLES_LIMIT).contains(&self.max_samples) {
            return Err(SplineError::InvalidConfig(format!(
                "max_samples muss in [2, {}] liegen, war {}",
                MAX_SAMPLES_LIMIT, self.max_samples
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SplineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.alpha, 0.5);
        assert_eq!(config.endpoint_mode, EndpointMode::Phantom);
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        assert!(SplineConfig::default().with_alpha(1.5).validate().is_err());
        assert!(SplineConfig::default().with_alpha(f32::NAN).validate().is_err());
        assert!(
            SplineConfig::default()
                .with_lut_samples_per_segment(0)
                .validate()
                .is_err()
        );

        let config = SplineConfig {
            duplicate_tolerance: -1.0,
            ..SplineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SplineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_limits() {
        let at_limit = SplineConfig {
            lut_samples_per_segment: MAX_LUT_SAMPLES_PER_SEGMENT,
            max_samples: MAX_SAMPLES_LIMIT,
            ..SplineConfig::default()
        };
        assert!(at_limit.validate().is_ok());

        assert!(matches!(
            SplineConfig::default()
                .with_lut_samples_per_segment(usize::MAX / 2 + 1)
                .validate(),
            Err(SplineError::InvalidConfig(_))
        ));
        assert!(
            SplineConfig::default()
                .with_lut_samples_per_segment(MAX_LUT_SAMPLES_PER_SEGMENT + 1)
                .validate()
                .is_err()
        );

        let config = SplineConfig {
            max_samples: usize::MAX,
            ..SplineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SplineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SplineConfig = toml::from_str("endpoint_mode = \"anchor\"").unwrap();
        assert_eq!(config.endpoint_mode, EndpointMode::Anchor);
        assert_eq!(config.lut_samples_per_segment, DEFAULT_LUT_SAMPLES_PER_SEGMENT);
    }

    #[test]
    fn test_min_points_per_mode() {
        assert_eq!(EndpointMode::Phantom.min_points(), 2);
        assert_eq!(EndpointMode::Anchor.min_points(), 4);
    }
}
