//! Batch processing of sensor packages.
//!
//! Packages are handled strictly in order. The first failure aborts the
//! batch; lines already written stay written.

use std::io::Write;

use crate::config::OutputFormat;
use crate::registry::Package;
use crate::training::Training;
use crate::{InfoMessage, TrainingResult};

/// Reference readings from the sensor demo set.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Dispatch a single package and compute its summary.
pub fn summarize(package: &Package) -> TrainingResult<InfoMessage> {
    let workout = package.read()?;
    let info = workout.show_training_info();
    tracing::debug!(
        code = %package.code,
        training_type = %info.training_type,
        distance = info.distance,
        calories = info.calories,
        "package processed"
    );
    metrics::counter!("trainings_processed_total", "type" => workout.name()).increment(1);
    Ok(info)
}

/// Write one summary line per package to `out`.
pub fn run<W: Write>(packages: &[Package], out: &mut W) -> TrainingResult<usize> {
    run_with(packages, out, OutputFormat::Text)
}

/// Write one JSON object per package to `out` (JSON Lines).
pub fn run_json<W: Write>(packages: &[Package], out: &mut W) -> TrainingResult<usize> {
    run_with(packages, out, OutputFormat::Json)
}

pub fn run_with<W: Write>(
    packages: &[Package],
    out: &mut W,
    format: OutputFormat,
) -> TrainingResult<usize> {
    tracing::info!(count = packages.len(), ?format, "processing packages");
    for package in packages {
        let info = summarize(package)?;
        match format {
            OutputFormat::Text => writeln!(out, "{}", info.get_message())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &info)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(packages.len())
}
