//! Integrationstests für die Pfadglättung:
//! - Laden aus JSON-Fixtures
//! - Glätten mit Phantom- und Anchor-Endpunkten
//! - Rückfall auf den unveränderten Pfad

use approx::assert_abs_diff_eq;
use glam::Vec3;
use nav_path_smoother::{
    parse_nav_path, smooth_path, CatmullRomSpline, EndpointMode, NavPath, SmootherOptions,
    SplineConfig, DEFAULT_SAMPLE_LENGTH,
};

fn curved() -> NavPath {
    parse_nav_path(include_str!("fixtures/curved_path.json")).expect("Fixture muss parsebar sein")
}

fn collinear() -> NavPath {
    parse_nav_path(include_str!("fixtures/collinear_path.json"))
        .expect("Fixture muss parsebar sein")
}

// ─── Phantom-Modus ─────────────────────────────────────────────────────────────

#[test]
fn test_smooth_curved_path_keeps_endpoints() {
    let path = curved();
    let smoothed = smooth_path(&path, 20.0, &SplineConfig::default());

    assert!(smoothed.valid);
    assert!(smoothed.points.len() > path.points.len());
    assert_eq!(smoothed.points.first(), path.points.first());
    assert_eq!(smoothed.points.last(), path.points.last());
}

#[test]
fn test_smooth_path_point_count_matches_arc_length() {
    let path = curved();
    let spline = CatmullRomSpline::from_points(&path.points).unwrap();
    let arc = spline.arc_length().unwrap();

    let smoothed = smooth_path(&path, 30.0, &SplineConfig::default());
    let expected = (arc / 30.0).floor() as usize + 1;
    assert_eq!(smoothed.points.len(), expected);
}

#[test]
fn test_smoothed_path_is_longer_than_chords() {
    let path = curved();
    let smoothed = smooth_path(&path, 5.0, &SplineConfig::default());
    // Dicht gesampelte Kurve ist mindestens so lang wie der Polygonzug durch die Wegpunkte
    assert!(smoothed.length() >= path.length() * 0.999);
}

#[test]
fn test_default_sample_length_on_collinear_path() {
    let path = collinear();
    let smoothed = smooth_path(&path, DEFAULT_SAMPLE_LENGTH, &SplineConfig::default());
    let xs: Vec<f32> = smoothed.points.iter().map(|p| p.x).collect();
    assert_eq!(xs.len(), 4);
    for (x, want) in xs.iter().zip([0.0f32, 100.0, 200.0, 300.0]) {
        assert_abs_diff_eq!(*x, want, epsilon = 1e-2);
    }
}

// ─── Anchor-Modus ──────────────────────────────────────────────────────────────

#[test]
fn test_anchor_options_from_toml() {
    let options: SmootherOptions =
        toml::from_str(include_str!("fixtures/smoother_options.toml")).unwrap();
    assert_eq!(options.spline.endpoint_mode, EndpointMode::Anchor);

    let path = collinear();
    let smoothed = smooth_path(&path, options.sample_length, &options.spline);
    let xs: Vec<f32> = smoothed.points.iter().map(|p| p.x).collect();
    assert_eq!(xs.len(), 5);
    for (x, want) in xs.iter().zip([0.0f32, 100.0, 150.0, 200.0, 300.0]) {
        assert_abs_diff_eq!(*x, want, epsilon = 1e-2);
    }
}

#[test]
fn test_anchor_mode_with_three_points_keeps_path() {
    let config = SplineConfig::default().with_endpoint_mode(EndpointMode::Anchor);
    let path = NavPath::new(vec![Vec3::ZERO, Vec3::X * 10.0, Vec3::Y * 10.0]);
    assert_eq!(smooth_path(&path, 1.0, &config), path);
}

// ─── Rückfall ──────────────────────────────────────────────────────────────────

#[test]
fn test_invalid_fixture_is_returned_unmodified() {
    let path = parse_nav_path(include_str!("fixtures/invalid_path.json")).unwrap();
    assert!(!path.is_valid());
    assert_eq!(smooth_path(&path, 10.0, &SplineConfig::default()), path);
}

#[test]
fn test_sample_limit_keeps_path() {
    let config = SplineConfig {
        max_samples: 4,
        ..SplineConfig::default()
    };
    let path = curved();
    assert_eq!(smooth_path(&path, 1.0, &config), path);
}
