//! Punkt-Validierung, Endpunkt-Padding und Knoten-Parametrisierung.

use crate::config::EndpointMode;
use crate::error::SplineError;
use glam::Vec3;

/// Bereinigt die Eingabe: prüft auf endliche Koordinaten und entfernt
/// aufeinanderfolgende Duplikate (Abstand ≤ `tolerance`).
///
/// Gibt `TooFewPoints` zurück wenn weniger als 2 Punkte übergeben wurden und
/// `Degenerate` wenn mehrere Punkte auf einen einzigen zusammenfallen.
pub(crate) fn usable_points(
    points: &[Vec3],
    tolerance: f32,
    mode: EndpointMode,
) -> Result<Vec<Vec3>, SplineError> {
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(SplineError::NonFinitePoint { index });
    }

    let required = mode.min_points();
    if points.len() < 2 {
        return Err(SplineError::TooFewPoints {
            required,
            found: points.len(),
        });
    }

    let mut usable: Vec<Vec3> = Vec::with_capacity(points.len());
    for &point in points {
        match usable.last() {
            Some(last) if last.distance(point) <= tolerance => {}
            _ => usable.push(point),
        }
    }

    if usable.len() == 1 {
        return Err(SplineError::Degenerate);
    }
    if usable.len() < required {
        return Err(SplineError::TooFewPoints {
            required,
            found: usable.len(),
        });
    }
    Ok(usable)
}

/// Ergänzt je nach Modus Phantom-Punkte an beiden Enden.
///
/// Rückgabe: (Punktliste, Index des ersten nutzbaren Knotens, Index des letzten).
/// Jeder nutzbare Knoten hat danach einen Vorgänger und einen Nachfolger.
pub(crate) fn pad_endpoints(
    mut points: Vec<Vec3>,
    mode: EndpointMode,
) -> (Vec<Vec3>, usize, usize) {
    match mode {
        EndpointMode::Phantom => {
            let n = points.len();
            // Gespiegelt am ersten bzw. letzten echten Segment
            let start_phantom = 2.0 * points[0] - points[1];
            let end_phantom = 2.0 * points[n - 1] - points[n - 2];
            points.insert(0, start_phantom);
            points.push(end_phantom);
            let last = points.len() - 2;
            (points, 1, last)
        }
        EndpointMode::Anchor => {
            let last = points.len() - 2;
            (points, 1, last)
        }
    }
}

/// Knoten-Parameter: `t[0] = 0`, `t[i] = t[i-1] + |p[i] - p[i-1]|^alpha`.
pub(crate) fn knot_parameters(points: &[Vec3], alpha: f32) -> Vec<f32> {
    let mut knots = Vec::with_capacity(points.len());
    let mut t = 0.0f32;
    knots.push(t);
    for pair in points.windows(2) {
        t += pair[0].distance(pair[1]).powf(alpha);
        knots.push(t);
    }
    knots
}

/// Summe der Sehnenlängen zwischen den nutzbaren Knoten `first..=last`.
pub(crate) fn chord_length(points: &[Vec3], first: usize, last: usize) -> f32 {
    points[first..=last]
        .windows(2)
        .map(|w| w[0].distance(w[1]))
        .sum()
}
