//! Fehlertypen des Spline-Kerns.

use thiserror::Error;

/// Alle Fehler, die beim Aufbau oder bei der Auswertung eines Splines auftreten.
///
/// Kein Fehler ist fatal: der Aufrufer kann auf `is_valid()` prüfen oder
/// das `Result` auswerten und mit dem ursprünglichen Pfad weiterarbeiten.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Zu wenige nutzbare Punkte nach der Duplikat-Bereinigung.
    #[error("zu wenige Punkte fuer einen Spline: benoetigt {required}, vorhanden {found}")]
    TooFewPoints {
        /// Mindestanzahl für den gewählten Endpunkt-Modus
        required: usize,
        /// Anzahl nutzbarer Punkte
        found: usize,
    },
    /// Alle Eingabepunkte liegen aufeinander.
    #[error("alle Punkte liegen aufeinander, Spline ist entartet")]
    Degenerate,
    /// Ein Eingabepunkt enthält NaN oder Unendlich.
    #[error("Punkt {index} enthaelt keine endlichen Koordinaten")]
    NonFinitePoint {
        /// Index in der Eingabeliste
        index: usize,
    },
    /// Koordinaten so groß, dass Knoten oder Bogenlänge nicht mehr endlich sind.
    #[error("Bogenlaenge nicht endlich, Koordinaten zu gross")]
    NumericOverflow,
    /// Auswertung auf einem Spline, der nie erfolgreich aufgebaut wurde.
    #[error("Spline ist nicht gueltig (nie erfolgreich aufgebaut)")]
    NotBuilt,
    /// Parameter oder Distanz ist NaN.
    #[error("Eingabewert ist NaN")]
    NonFiniteInput,
    /// Sample-Abstand ist nicht positiv oder nicht endlich.
    #[error("ungueltiger Sample-Abstand: {0}")]
    InvalidSpacing(f32),
    /// Resampling würde mehr Punkte erzeugen als erlaubt.
    #[error("Resampling wuerde {requested} Punkte erzeugen (Limit {limit})")]
    TooManySamples {
        /// Angeforderte Punktanzahl
        requested: usize,
        /// Konfiguriertes Limit
        limit: usize,
    },
    /// Konfiguration außerhalb des gültigen Bereichs.
    #[error("ungueltige Spline-Konfiguration: {0}")]
    InvalidConfig(String),
}
