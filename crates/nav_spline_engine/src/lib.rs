//! `nav_spline_engine` — zentripetale Catmull-Rom-Splines für Navigationspfade.
//!
//! Engine-unabhängiger Kern der Pfadglättung:
//! - Aufbau eines Splines aus einer geordneten Punktliste (inkl. Phantom-Endpunkte)
//! - Auswertung per normalisiertem Parameter (Barry–Goldman-Pyramide)
//! - Bogenlängen-LUT und Umkehrung Distanz → Parameter
//! - Gleichabständiges Resampling entlang der echten Bogenlänge
//!
//! # Beispiel
//! ```
//! use glam::Vec3;
//! use nav_spline_engine::CatmullRomSpline;
//!
//! let points = [
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(100.0, 0.0, 0.0),
//!     Vec3::new(200.0, 50.0, 0.0),
//! ];
//! let spline = CatmullRomSpline::from_points(&points)?;
//! let samples = spline.equidistant_samples(25.0)?;
//! assert_eq!(samples.first().copied(), Some(points[0]));
//! # Ok::<(), nav_spline_engine::SplineError>(())
//! ```

pub mod config;
pub mod error;
pub mod spline;

pub use config::{
    DEFAULT_ALPHA, DEFAULT_DUPLICATE_TOLERANCE, DEFAULT_LUT_SAMPLES_PER_SEGMENT,
    DEFAULT_MAX_SAMPLES, DEFAULT_SAMPLE_LENGTH, EndpointMode, MAX_LUT_SAMPLES_PER_SEGMENT,
    MAX_SAMPLES_LIMIT, SplineConfig,
};
pub use error::SplineError;
pub use spline::CatmullRomSpline;
