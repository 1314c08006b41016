//! Zentripetaler Catmull-Rom-Spline mit Bogenlängen-LUT.
//!
//! Ablauf beim Aufbau: Punkt-Validierung → Phantom-Endpunkte → Knoten-Parameter
//! → LUT. Danach ist der Spline unveränderlich; alle Abfragen lesen nur.

mod basis;
mod knots;
mod lut;
mod resample;


use crate::config::SplineConfig;
use crate::error::SplineError;
use basis::segment_point;
use glam::Vec3;
use lut::DistanceLut;

/// Aufgebauter Zustand eines gültigen Splines.
#[derive(Debug, Clone, PartialEq)]
struct SplineState {
    /// Kontrollpunkte inkl. evtl. Phantom-Endpunkten
    points: Vec<Vec3>,
    /// Knoten-Parameter, einer pro Kontrollpunkt
    knots: Vec<f32>,
    /// Index des ersten nutzbaren Knotens (Parameter 0)
    first: usize,
    /// Index des letzten nutzbaren Knotens (Parameter 1)
    last: usize,
    /// Knoten-Parameter bei `first`
    min_parameter: f32,
    /// Knoten-Parameter bei `last`
    max_parameter: f32,
    /// `max_parameter - min_parameter`
    parameter_scale: f32,
    /// Summe der Sehnenlängen über den nutzbaren Bereich
    segments_length: f32,
    distance_lut: DistanceLut,
}

impl SplineState {
    fn build(points: &[Vec3], config: &SplineConfig) -> Result<Self, SplineError> {
        config.validate()?;

        let usable =
            knots::usable_points(points, config.duplicate_tolerance, config.endpoint_mode)?;
        let (points, first, last) = knots::pad_endpoints(usable, config.endpoint_mode);
        let knots = knots::knot_parameters(&points, config.alpha);

        let min_parameter = knots[first];
        let max_parameter = knots[last];
        let segments_length = knots::chord_length(&points, first, last);

        let mut state = Self {
            points,
            knots,
            first,
            last,
            min_parameter,
            max_parameter,
            parameter_scale: max_parameter - min_parameter,
            segments_length,
            distance_lut: DistanceLut::default(),
        };
        state.fill_lut(config.lut_samples_per_segment)?;
        if !state.distance_lut.total().is_finite() || !state.max_parameter.is_finite() {
            return Err(SplineError::NumericOverflow);
        }
        Ok(state)
    }

    fn fill_lut(&mut self, samples_per_segment: usize) -> Result<(), SplineError> {
        let intervals = (self.last - self.first)
            .checked_mul(samples_per_segment)
            .ok_or_else(|| {
                SplineError::InvalidConfig(format!(
                    "LUT mit {} Intervallen je Segment zu groß",
                    samples_per_segment
                ))
            })?;
        self.distance_lut = DistanceLut::build(intervals, |u| self.position_at(u));
        Ok(())
    }

    /// Punkt am normalisierten Parameter `u` (wird auf [0, 1] begrenzt).
    fn position_at(&self, u: f32) -> Vec3 {
        // u ≥ 1 landet exakt auf dem letzten Knoten
        let t = if u >= 1.0 {
            self.max_parameter
        } else {
            self.min_parameter + u.max(0.0) * self.parameter_scale
        };
        let k = self.segment_index(t);
        segment_point(
            [
                self.points[k - 1],
                self.points[k],
                self.points[k + 1],
                self.points[k + 2],
            ],
            [
                self.knots[k - 1],
                self.knots[k],
                self.knots[k + 1],
                self.knots[k + 2],
            ],
            t,
        )
    }

    /// Index `k` des Segments `knots[k] ≤ t ≤ knots[k + 1]` im nutzbaren Bereich.
    fn segment_index(&self, t: f32) -> usize {
        let usable = &self.knots[self.first..=self.last];
        let above = usable.partition_point(|&knot| knot <= t);
        self.first + above.saturating_sub(1).min(usable.len() - 2)
    }
}

/// Zentripetaler Catmull-Rom-Spline über einer Punktliste.
///
/// Zustände: nicht aufgebaut (initial) und gültig (nach erfolgreichem
/// [`generate`](Self::generate)). Ein fehlgeschlagener Neuaufbau lässt einen
/// zuvor gültigen Zustand unverändert.
///
/// Der normalisierte Parameter `0.0..=1.0` läuft vom ersten zum letzten
/// nutzbaren Knoten (siehe [`EndpointMode`](crate::EndpointMode)).
#[derive(Debug, Clone, Default)]
pub struct CatmullRomSpline {
    config: SplineConfig,
    state: Option<SplineState>,
}

impl CatmullRomSpline {
    /// Erstellt einen leeren (ungültigen) Spline mit der gegebenen Konfiguration.
    pub fn new(config: SplineConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Baut einen Spline mit Standard-Konfiguration.
    pub fn from_points(points: &[Vec3]) -> Result<Self, SplineError> {
        Self::from_points_with_config(points, SplineConfig::default())
    }

    /// Baut einen Spline mit eigener Konfiguration.
    pub fn from_points_with_config(
        points: &[Vec3],
        config: SplineConfig,
    ) -> Result<Self, SplineError> {
        let mut spline = Self::new(config);
        spline.generate(points)?;
        Ok(spline)
    }

    /// (Neu-)Aufbau aus `points`.
    ///
    /// Der neue Zustand wird vollständig berechnet und erst bei Erfolg
    /// übernommen. Bei einem Fehler bleibt der bisherige Zustand erhalten.
    pub fn generate(&mut self, points: &[Vec3]) -> Result<(), SplineError> {
        match SplineState::build(points, &self.config) {
            Ok(state) => {
                log::debug!(
                    "Spline aufgebaut: {} Eingabepunkte, {} Knoten, Bogenlaenge {:.3}",
                    points.len(),
                    state.knots.len(),
                    state.distance_lut.total()
                );
                self.state = Some(state);
                Ok(())
            }
            Err(e) => {
                log::debug!("Spline-Aufbau fehlgeschlagen: {}", e);
                Err(e)
            }
        }
    }

    /// `true` nach einem erfolgreichen Aufbau.
    pub fn is_valid(&self) -> bool {
        self.state.is_some()
    }

    /// Konfiguration, mit der der Spline aufgebaut wird.
    pub fn config(&self) -> &SplineConfig {
        &self.config
    }

    /// Punkt am normalisierten Parameter `t`.
    ///
    /// `t` wird auf `[0, 1]` begrenzt (0 = erster, 1 = letzter nutzbarer Knoten).
    pub fn sample_by_parameter(&self, t: f32) -> Result<Vec3, SplineError> {
        let state = self.built()?;
        if t.is_nan() {
            return Err(SplineError::NonFiniteInput);
        }
        Ok(state.position_at(t))
    }

    /// Näherungsweiser Parameter für eine Distanz entlang der Kurve.
    ///
    /// `distance ≤ 0` → 0, `distance ≥ arc_length()` → 1.
    pub fn find_parameter_for_distance(&self, distance: f32) -> Result<f32, SplineError> {
        let state = self.built()?;
        if distance.is_nan() {
            return Err(SplineError::NonFiniteInput);
        }
        Ok(state.distance_lut.parameter_for_distance(distance))
    }

    /// Punkt an einer Distanz entlang der Kurve.
    pub fn sample_by_distance(&self, distance: f32) -> Result<Vec3, SplineError> {
        let t = self.find_parameter_for_distance(distance)?;
        self.sample_by_parameter(t)
    }

    /// Punkte im Abstand `spacing` entlang der Bogenlänge, inkl. Start und Ende.
    pub fn equidistant_samples(&self, spacing: f32) -> Result<Vec<Vec3>, SplineError> {
        let state = self.built()?;
        let distances = resample::sample_distances(
            state.distance_lut.total(),
            spacing,
            self.config.max_samples,
        )?;
        Ok(distances
            .into_iter()
            .map(|d| state.position_at(state.distance_lut.parameter_for_distance(d)))
            .collect())
    }

    /// Näherungsweise Bogenlänge (letzter LUT-Eintrag).
    pub fn arc_length(&self) -> Result<f32, SplineError> {
        Ok(self.built()?.distance_lut.total())
    }

    /// Summe der Sehnenlängen zwischen den nutzbaren Knoten.
    pub fn segments_length(&self) -> Result<f32, SplineError> {
        Ok(self.built()?.segments_length)
    }

    /// Kontrollpunkte inkl. Phantom-Endpunkten (leer wenn ungültig).
    pub fn control_points(&self) -> &[Vec3] {
        self.state.as_ref().map_or(&[], |s| s.points.as_slice())
    }

    /// Knoten-Parameter, einer pro Kontrollpunkt (leer wenn ungültig).
    pub fn knots(&self) -> &[f32] {
        self.state.as_ref().map_or(&[], |s| s.knots.as_slice())
    }

    /// Kumulierte Distanzen der LUT (leer wenn ungültig).
    pub fn distance_lut(&self) -> &[f32] {
        self.state.as_ref().map_or(&[], |s| s.distance_lut.entries())
    }

    /// Knoten-Parameterbereich `(min, max)` des nutzbaren Kurvenstücks.
    pub fn parameter_range(&self) -> Option<(f32, f32)> {
        self.state
            .as_ref()
            .map(|s| (s.min_parameter, s.max_parameter))
    }

    fn built(&self) -> Result<&SplineState, SplineError> {
        self.state.as_ref().ok_or_else(|| {
            log::warn!("Spline-Abfrage auf ungueltigem Spline");
            SplineError::NotBuilt
        })
    }
}
