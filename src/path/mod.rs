//! Navigationspfad und Pfadglättung per Catmull-Rom-Spline.
//!
//! Der Pfad kommt von einem Pathfinding-Kollaborateur; hier wird er nur
//! geglättet und mit neuen Punkten zurückgegeben.


use glam::Vec3;
use nav_spline_engine::{CatmullRomSpline, EndpointMode, SplineConfig};
use serde::{Deserialize, Serialize};

/// Geordnete Wegpunkte eines Navigationspfads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavPath {
    /// Wegpunkte in Weltkoordinaten
    pub points: Vec<Vec3>,
    /// false wenn das Pathfinding keinen gültigen Pfad geliefert hat
    #[serde(default = "default_valid")]
    pub valid: bool,
}

/// Serde-Default für `valid` (Pfad-Dateien ohne das Feld gelten als gültig).
fn default_valid() -> bool {
    true
}

impl NavPath {
    /// Erstellt einen gültigen Pfad aus Wegpunkten.
    pub fn new(points: Vec<Vec3>) -> Self {
        Self {
            points,
            valid: true,
        }
    }

    /// Erstellt einen als ungültig markierten Pfad.
    pub fn invalid() -> Self {
        Self {
            points: Vec::new(),
            valid: false,
        }
    }

    /// Gültig = vom Pathfinding als gültig markiert und mindestens ein Punkt.
    pub fn is_valid(&self) -> bool {
        self.valid && !self.points.is_empty()
    }

    /// Ersetzt die Wegpunkte des Pfads.
    pub fn set_points(&mut self, points: Vec<Vec3>) {
        self.points = points;
    }

    /// Länge des Polygonzugs.
    pub fn length(&self) -> f32 {
        polyline_length(&self.points)
    }
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Baut einen Spline aus Pfadpunkten. `None` wenn der Aufbau fehlschlägt.
pub fn make_catmull_rom_spline(
    points: &[Vec3],
    config: &SplineConfig,
) -> Option<CatmullRomSpline> {
    match CatmullRomSpline::from_points_with_config(points, config.clone()) {
        Ok(spline) => Some(spline),
        Err(e) => {
            log::warn!("Spline konnte nicht erzeugt werden: {}", e);
            None
        }
    }
}

/// Glättet einen Pfad: Spline über alle Wegpunkte, danach Samples im Abstand
/// `sample_length` entlang der Bogenlänge.
///
/// Ungültige Pfade und Pfade, aus denen kein Spline entsteht, werden
/// unverändert zurückgegeben. Im `Anchor`-Modus erreicht der Spline den
/// ersten und letzten Wegpunkt nicht; diese werden wieder angehängt.
pub fn smooth_path(path: &NavPath, sample_length: f32, config: &SplineConfig) -> NavPath {
    if !path.is_valid() {
        log::warn!("Pfadglaettung: ungueltiger Pfad, bleibt unveraendert");
        return path.clone();
    }

    let Some(spline) = make_catmull_rom_spline(&path.points, config) else {
        return path.clone();
    };

    let samples = match spline.equidistant_samples(sample_length) {
        Ok(samples) => samples,
        Err(e) => {
            log::warn!("Pfadglaettung abgebrochen: {}", e);
            return path.clone();
        }
    };

    let points = match config.endpoint_mode {
        EndpointMode::Phantom => samples,
        EndpointMode::Anchor => {
            let mut points = Vec::with_capacity(samples.len() + 2);
            points.extend(path.points.first().copied());
            points.extend(samples);
            points.extend(path.points.last().copied());
            points
        }
    };

    log::debug!(
        "Pfad geglaettet: {} → {} Punkte, Laenge {:.2} → {:.2}",
        path.points.len(),
        points.len(),
        path.length(),
        polyline_length(&points)
    );

    let mut smoothed = path.clone();
    smoothed.set_points(points);
    smoothed
}
