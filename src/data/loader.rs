use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use thiserror::Error;

use super::model::{Attribute, AttributeSeries, StatsRun};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Directory the simulation build writes per-particle statistics into,
/// relative to the directory the viewer is launched from.
pub const STATS_DIR: &str = "../build/particlestats";

/// Load the full stats triple for a run.
///
/// The run identifier is interpolated verbatim into
/// `<dir>/psr-<run>.txt`, `<dir>/pfm-<run>.txt` and `<dir>/vel-<run>.txt`.
/// The first file that is missing, unreadable, or contains a non-numeric
/// token aborts the whole load; there is no partial run.
pub fn load_run(dir: &Path, run_id: &str) -> Result<StatsRun> {
    let series = [
        load_series_for(dir, Attribute::Pressure, run_id)?,
        load_series_for(dir, Attribute::PressureForce, run_id)?,
        load_series_for(dir, Attribute::Velocity, run_id)?,
    ];

    Ok(StatsRun {
        run_id: run_id.to_string(),
        series,
    })
}

/// Path of one attribute's stats file: `<dir>/<prefix>-<run_id>.txt`.
pub fn stats_path(dir: &Path, attribute: Attribute, run_id: &str) -> PathBuf {
    dir.join(format!("{}-{}.txt", attribute.prefix(), run_id))
}

fn load_series_for(dir: &Path, attribute: Attribute, run_id: &str) -> Result<AttributeSeries> {
    let path = stats_path(dir, attribute, run_id);
    let values = load_series(&path)?;
    log::info!("{attribute}: {} samples from {}", values.len(), path.display());
    Ok(AttributeSeries { attribute, values })
}

// ---------------------------------------------------------------------------
// Whitespace-float file parsing
// ---------------------------------------------------------------------------

/// Malformed numeric content in a stats file.
#[derive(Debug, Error)]
#[error("token {index} ('{token}') is not a number")]
pub struct BadToken {
    pub index: usize,
    pub token: String,
}

/// Parse one stats file: floats separated by any mix of spaces and
/// newlines, any number of values per line. An empty file is an empty
/// series.
pub fn load_series(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_series(&text).with_context(|| format!("parsing {}", path.display()))
}

fn parse_series(text: &str) -> Result<Vec<f64>, BadToken> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f64>().map_err(|_| BadToken {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Run derivation from a picked file (File → Open…)
// ---------------------------------------------------------------------------

/// Derive `(directory, run id)` from any one file of a run's triple,
/// e.g. `/data/stats/vel-007.txt` → (`/data/stats`, `"007"`).
pub fn run_from_file(path: &Path) -> Result<(PathBuf, String)> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("bad file name: {}", path.display()))?;

    let stem = name
        .strip_suffix(".txt")
        .with_context(|| format!("'{name}' is not a .txt stats file"))?;
    let (prefix, run_id) = stem
        .split_once('-')
        .with_context(|| format!("'{name}' does not match <prefix>-<run>.txt"))?;

    if Attribute::from_prefix(prefix).is_none() {
        bail!("unknown stats prefix '{prefix}' in '{name}'");
    }
    if run_id.is_empty() {
        bail!("empty run identifier in '{name}'");
    }

    let dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
    Ok((dir, run_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn stats_paths_follow_the_prefix_run_convention() {
        let dir = Path::new("../build/particlestats");
        assert_eq!(
            stats_path(dir, Attribute::Pressure, "007"),
            Path::new("../build/particlestats/psr-007.txt")
        );
        assert_eq!(
            stats_path(dir, Attribute::PressureForce, "007"),
            Path::new("../build/particlestats/pfm-007.txt")
        );
        assert_eq!(
            stats_path(dir, Attribute::Velocity, "007"),
            Path::new("../build/particlestats/vel-007.txt")
        );
    }

    #[test]
    fn loads_a_full_run_with_unequal_lengths() {
        let dir = tempdir().unwrap();
        write(dir.path(), "psr-007.txt", "1 2 3\n4 5\n");
        write(dir.path(), "pfm-007.txt", "10\n20\n30\n");
        write(dir.path(), "vel-007.txt", "0.1 0.2");

        let run = load_run(dir.path(), "007").unwrap();
        assert_eq!(run.run_id, "007");
        assert_eq!(run.series[0].values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(run.series[1].values, vec![10.0, 20.0, 30.0]);
        assert_eq!(run.series[2].values, vec![0.1, 0.2]);
        assert_eq!(run.total_samples(), 10);
    }

    #[test]
    fn empty_file_is_an_empty_series() {
        let dir = tempdir().unwrap();
        write(dir.path(), "psr-e.txt", "");
        assert_eq!(load_series(&dir.path().join("psr-e.txt")).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn non_numeric_token_fails_the_file() {
        let dir = tempdir().unwrap();
        write(dir.path(), "psr-x.txt", "1.0 abc 2.0");
        write(dir.path(), "pfm-x.txt", "1.0");
        write(dir.path(), "vel-x.txt", "1.0");

        let err = load_run(dir.path(), "x").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("psr-x.txt"), "{msg}");
        assert!(msg.contains("'abc'"), "{msg}");
        assert!(msg.contains("token 1"), "{msg}");
    }

    #[test]
    fn missing_file_aborts_the_run() {
        let dir = tempdir().unwrap();
        write(dir.path(), "psr-r.txt", "1");

        let err = load_run(dir.path(), "r").unwrap_err();
        assert!(format!("{err:#}").contains("pfm-r.txt"));
    }

    #[test]
    fn run_from_file_derives_dir_and_id() {
        let (dir, id) = run_from_file(Path::new("/data/stats/vel-007.txt")).unwrap();
        assert_eq!(dir, Path::new("/data/stats"));
        assert_eq!(id, "007");

        // Hyphens after the prefix belong to the run identifier.
        let (_, id) = run_from_file(Path::new("psr-run-01.txt")).unwrap();
        assert_eq!(id, "run-01");
    }

    #[test]
    fn run_from_file_rejects_foreign_names() {
        assert!(run_from_file(Path::new("foo-007.txt")).is_err());
        assert!(run_from_file(Path::new("psr-007.dat")).is_err());
        assert!(run_from_file(Path::new("psr-.txt")).is_err());
        assert!(run_from_file(Path::new("notes.txt")).is_err());
    }
}
