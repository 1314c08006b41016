//! Kommandozeilen-Argumente der Binary.
//!
//! Aufruf: `nav-path-smoother <eingabe.json> [ausgabe.json] [--sample-length <f32>] [--config <optionen.toml>]`

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Hilfetext für `--help` und fehlerhafte Aufrufe.
pub const USAGE: &str = "nav-path-smoother <eingabe.json> [ausgabe.json] [--sample-length <f32>] [--config <optionen.toml>]";

/// Geparste Argumente.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    /// Pfad-Datei (JSON)
    pub input: PathBuf,
    /// Zieldatei; `None` = stdout
    pub output: Option<PathBuf>,
    /// Überschreibt `sample_length` aus den Optionen
    pub sample_length: Option<f32>,
    /// Eigene Optionen-Datei statt der neben der Binary
    pub config: Option<PathBuf>,
    /// Nur Hilfe ausgeben
    pub show_help: bool,
}

impl CliArgs {
    /// Parst die Argumente (ohne Programmnamen).
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positional = Vec::new();
        let mut sample_length = None;
        let mut config = None;
        let mut show_help = false;

        let mut iter = args.into_iter().map(Into::into);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => show_help = true,
                "--sample-length" => {
                    let value = iter
                        .next()
                        .context("--sample-length erwartet einen Wert")?;
                    let parsed: f32 = value
                        .parse()
                        .with_context(|| format!("ungueltige Sample-Laenge: {}", value))?;
                    sample_length = Some(parsed);
                }
                "--config" => {
                    let value = iter.next().context("--config erwartet einen Pfad")?;
                    config = Some(PathBuf::from(value));
                }
                other if other.starts_with("--") => bail!("unbekannte Option: {}", other),
                _ => positional.push(PathBuf::from(&arg)),
            }
        }

        if show_help {
            return Ok(Self {
                input: PathBuf::new(),
                output: None,
                sample_length,
                config,
                show_help,
            });
        }

        let mut positional = positional.into_iter();
        let input = positional
            .next()
            .with_context(|| format!("Eingabedatei fehlt\n{}", USAGE))?;
        let output = positional.next();
        if let Some(extra) = positional.next() {
            bail!("zu viele Argumente: {}", extra.display());
        }

        Ok(Self {
            input,
            output,
            sample_length,
            config,
            show_help,
        })
    }
}
