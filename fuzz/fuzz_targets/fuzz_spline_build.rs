#![no_main]

use glam::Vec3;
use libfuzzer_sys::fuzz_target;
use nav_spline_engine::{CatmullRomSpline, EndpointMode, SplineConfig};

fuzz_target!(|data: &[u8]| {
    // Erstes Byte: Endpunkt-Modus, danach je 12 Bytes ein Punkt (3× f32 LE)
    let Some((&mode, rest)) = data.split_first() else {
        return;
    };
    let points: Vec<Vec3> = rest
        .chunks_exact(12)
        .map(|c| {
            let f = |i: usize| f32::from_le_bytes([c[i], c[i + 1], c[i + 2], c[i + 3]]);
            Vec3::new(f(0), f(4), f(8))
        })
        .collect();

    let endpoint_mode = if mode % 2 == 0 {
        EndpointMode::Phantom
    } else {
        EndpointMode::Anchor
    };
    let config = SplineConfig {
        max_samples: 4096,
        ..SplineConfig::default().with_endpoint_mode(endpoint_mode)
    };

    let Ok(spline) = CatmullRomSpline::from_points_with_config(&points, config) else {
        return;
    };

    // Darf bei keiner Eingabe paniken
    let Ok(arc) = spline.arc_length() else {
        return;
    };
    let _ = spline.sample_by_parameter(0.5);
    let _ = spline.find_parameter_for_distance(arc * 0.5);
    let _ = spline.equidistant_samples((arc / 16.0).max(1e-3));
});
