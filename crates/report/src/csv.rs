//! CSV export.
//!
//! Columns are `Day, Year, SoH (%), Capacity (mAh)` with one row per
//! simulated day. Floats are written with their shortest round-trip
//! representation so nothing is lost.

use crate::error::ExportError;
use battery_soh_domain::value_objects::parameters::DAYS_PER_YEAR;
use battery_soh_domain::value_objects::simulation_result::SimulationResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Default export file name.
pub const DEFAULT_FILE_NAME: &str = "battery_simulation_results.csv";

/// Header row.
pub const HEADER: &str = "Day,Year,SoH (%),Capacity (mAh)";

/// Writes the result as CSV.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_csv<W: Write>(mut writer: W, result: &SimulationResult) -> Result<(), ExportError> {
    writeln!(writer, "{HEADER}")?;
    for ((day, soh), capacity) in result
        .days
        .iter()
        .zip(&result.soh_pct)
        .zip(&result.capacity_mah)
    {
        let year = f64::from(*day) / f64::from(DAYS_PER_YEAR);
        writeln!(writer, "{day},{year:?},{soh:?},{capacity:?}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders the result as a CSV string.
#[must_use]
pub fn to_csv_string(result: &SimulationResult) -> String {
    let mut buffer = Vec::with_capacity(result.len() * 48);
    // Writing to a Vec cannot fail.
    let _ = write_csv(&mut buffer, result);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Writes the result to a CSV file, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn export_csv(path: &Path, result: &SimulationResult) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(BufWriter::new(file), result)?;
    info!(path = %path.display(), rows = result.len(), "Wrote CSV export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use battery_soh_domain::value_objects::parameters::SimulationParameters;
    use battery_soh_simulation::simulate;

    #[test]
    fn test_header_and_first_rows() {
        let params = SimulationParameters::default().with_horizon_days(2);
        let csv = to_csv_string(&simulate(&params));
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Day,Year,SoH (%),Capacity (mAh)");
        assert_eq!(lines[1], "0,0.0,100.0,4000.0");
        assert!(lines[2].starts_with("1,0.0027397260273972603,99.9959"));
    }

    #[test]
    fn test_row_count_follows_early_termination() {
        let params = SimulationParameters::default()
            .with_charge_cycles_per_week(21.0)
            .with_temperature(60.0)
            .with_depth_of_discharge(100.0)
            .with_years(10);
        let result = simulate(&params);
        assert!(result.terminated_early());

        let csv = to_csv_string(&result);
        assert_eq!(csv.lines().count(), result.len() + 1);
        let last = csv.lines().last().unwrap();
        assert!(last.ends_with(",0.0,0.0"));
    }

    #[test]
    fn test_export_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        let result = simulate(&SimulationParameters::default().with_years(1));

        export_csv(&path, &result).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_csv_string(&result));
        assert_eq!(written.lines().count(), 367);
    }

    #[test]
    fn test_export_csv_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let result = simulate(&SimulationParameters::default().with_horizon_days(1));

        let err = export_csv(&path, &result).unwrap_err();
        assert!(matches!(err, ExportError::Create { .. }));
    }
}
