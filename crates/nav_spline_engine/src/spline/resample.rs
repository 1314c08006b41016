//! Distanz-Raster für das gleichabständige Resampling.

use crate::error::SplineError;

/// Toleranz beim Abrunden von `arc_length / spacing`, damit Rundungsfehler
/// (z.B. 3.99999 statt 4) keinen Sample verlieren.
const STEP_ROUNDING_EPSILON: f32 = 1e-4;

/// Distanzen `0, spacing, 2·spacing, …` und zum Schluss exakt `arc_length`.
///
/// Es werden `max(1, floor(arc_length / spacing))` Raster-Distanzen erzeugt,
/// danach folgt immer das Kurvenende. Der letzte Abstand kann daher größer als
/// `spacing` sein.
pub(crate) fn sample_distances(
    arc_length: f32,
    spacing: f32,
    max_samples: usize,
) -> Result<Vec<f32>, SplineError> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(SplineError::InvalidSpacing(spacing));
    }

    let steps = (arc_length / spacing + STEP_ROUNDING_EPSILON).floor().max(1.0);
    // `as usize` sättigt bei sehr großen Werten
    let requested = (steps as usize).saturating_add(1);
    if requested > max_samples {
        return Err(SplineError::TooManySamples {
            requested,
            limit: max_samples,
        });
    }

    let count = requested - 1;
    let mut distances: Vec<f32> = (0..count).map(|i| i as f32 * spacing).collect();
    distances.push(arc_length);
    Ok(distances)
}
