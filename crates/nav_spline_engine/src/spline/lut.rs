//! Bogenlängen-Lookup-Tabelle (Parameter → kumulierte Distanz) und ihre Umkehrung.

use glam::Vec3;

/// Kumulierte Bogenlänge an gleichmäßig verteilten normalisierten Parametern.
///
/// `entries[i]` ist die Länge des Polygonzugs von `u = 0` bis `u = i / intervals`.
/// Der erste Eintrag ist immer 0, die Folge ist monoton nicht fallend.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct DistanceLut {
    entries: Vec<f32>,
    /// Anzahl Intervalle als Faktor Parameter → Tabellen-Index
    parameter_scale: f32,
}

impl DistanceLut {
    /// Läuft die Kurve in `intervals` gleichen Parameterschritten ab und summiert
    /// die geraden Abstände zwischen aufeinanderfolgenden Samples.
    pub(crate) fn build(intervals: usize, position_at: impl Fn(f32) -> Vec3) -> Self {
        let intervals = intervals.max(1);
        let mut entries = Vec::with_capacity(intervals + 1);
        let mut total = 0.0f32;
        let mut prev = position_at(0.0);
        entries.push(total);

        for i in 1..=intervals {
            let u = i as f32 / intervals as f32;
            let point = position_at(u);
            total += prev.distance(point);
            entries.push(total);
            prev = point;
        }

        Self {
            entries,
            parameter_scale: intervals as f32,
        }
    }

    /// Gesamtlänge (letzter Eintrag).
    pub(crate) fn total(&self) -> f32 {
        self.entries.last().copied().unwrap_or(0.0)
    }

    pub(crate) fn entries(&self) -> &[f32] {
        &self.entries
    }

    /// Normalisierter Parameter für eine Distanz entlang der Kurve.
    ///
    /// `distance ≤ 0` → 0, `distance ≥ total` → 1, dazwischen lineare
    /// Interpolation zwischen den einschließenden Tabelleneinträgen.
    /// `distance` darf nicht NaN sein.
    pub(crate) fn parameter_for_distance(&self, distance: f32) -> f32 {
        let total = self.total();
        if distance <= 0.0 {
            return 0.0;
        }
        if distance >= total {
            return 1.0;
        }

        // Erster Eintrag >= distance; entries[0] == 0 < distance, also hi >= 1
        let hi = self.entries.partition_point(|&e| e < distance);
        let lo = hi - 1;
        let span = self.entries[hi] - self.entries[lo];
        let fraction = if span > f32::EPSILON {
            (distance - self.entries[lo]) / span
        } else {
            0.0
        };

        ((lo as f32 + fraction) / self.parameter_scale).clamp(0.0, 1.0)
    }
}
