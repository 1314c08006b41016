//! NavPath Smoother Library.
//! Pfadglättung für Navigationspfade, als Library exportiert für Tests und Wiederverwendung.

pub mod cli;
pub mod io;
pub mod path;
pub mod shared;

pub use io::{load_nav_path, parse_nav_path, save_nav_path, write_nav_path};
pub use nav_spline_engine::{
    CatmullRomSpline, EndpointMode, SplineConfig, SplineError, DEFAULT_SAMPLE_LENGTH,
};
pub use path::{make_catmull_rom_spline, polyline_length, smooth_path, NavPath};
pub use shared::SmootherOptions;
