//! Geteilte Typen und Konfiguration.

pub mod options;

pub use options::{SmootherOptions, OPTIONS_FILE_NAME};
