//! Auswertung eines einzelnen Catmull-Rom-Segments nach Barry–Goldman.
//!
//! Statt fester Basisgewichte wird die Pyramide aus linearen Interpolationen
//! mit den (ungleichmäßigen) Knoten des Segments aufgebaut.

use glam::Vec3;

/// Knotenabstände darunter werden nicht mehr als Divisor verwendet.
const MIN_KNOT_SPAN: f32 = 1e-6;

/// Lineare Überblendung von `p` (bei `ti`) nach `q` (bei `tj`) an der Stelle `t`.
///
/// Bei entartetem Knotenabstand liefert sie `p` statt durch ~0 zu teilen.
fn blend(p: Vec3, q: Vec3, ti: f32, tj: f32, t: f32) -> Vec3 {
    let span = tj - ti;
    if span.abs() < MIN_KNOT_SPAN {
        return p;
    }
    p * ((tj - t) / span) + q * ((t - ti) / span)
}

/// Punkt auf dem Segment `points[1] → points[2]` am Knoten-Parameter `t`.
///
/// `points`: vier aufeinanderfolgende Kontrollpunkte,
/// `knots`: deren Knoten-Parameter (aufsteigend).
/// An den Segmentgrenzen werden die Kontrollpunkte exakt zurückgegeben.
pub(crate) fn segment_point(points: [Vec3; 4], knots: [f32; 4], t: f32) -> Vec3 {
    let [p0, p1, p2, p3] = points;
    let [t0, t1, t2, t3] = knots;

    if t <= t1 {
        return p1;
    }
    if t >= t2 {
        return p2;
    }

    let a1 = blend(p0, p1, t0, t1, t);
    let a2 = blend(p1, p2, t1, t2, t);
    let a3 = blend(p2, p3, t2, t3, t);

    let b1 = blend(a1, a2, t0, t2, t);
    let b2 = blend(a2, a3, t1, t3, t);

    blend(b1, b2, t1, t2, t)
}
