//! JSON export of a full simulation run.

use crate::error::ExportError;
use battery_soh_domain::value_objects::parameters::SimulationParameters;
use battery_soh_domain::value_objects::simulation_result::SimulationResult;
use battery_soh_simulation::degradation::DailyDegradation;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Parameters, degradation breakdown and trajectory of one run.
#[derive(Debug, Serialize)]
pub struct SimulationReport<'a> {
    /// Input parameters.
    pub parameters: &'a SimulationParameters,
    /// Per-day degradation components.
    pub daily_degradation: DailyDegradation,
    /// Simulated trajectory.
    pub result: &'a SimulationResult,
}

impl<'a> SimulationReport<'a> {
    #[must_use]
    pub fn new(parameters: &'a SimulationParameters, result: &'a SimulationResult) -> Self {
        Self {
            parameters,
            daily_degradation: DailyDegradation::from_parameters(parameters),
            result,
        }
    }
}

/// Writes the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or the writer fails.
pub fn write_json<W: Write>(
    mut writer: W,
    report: &SimulationReport<'_>,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes the report to a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn export_json(path: &Path, report: &SimulationReport<'_>) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_json(BufWriter::new(file), report)?;
    info!(path = %path.display(), "Wrote JSON export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use battery_soh_simulation::simulate;

    #[test]
    fn test_json_contains_all_sections() {
        let params = SimulationParameters::default().with_horizon_days(3);
        let result = simulate(&params);
        let report = SimulationReport::new(&params, &result);

        let mut buffer = Vec::new();
        write_json(&mut buffer, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["parameters"]["charging_habit"], "Full");
        assert_eq!(value["result"]["days"].as_array().unwrap().len(), 4);
        assert_eq!(value["result"]["soh_pct"][0], 100.0);
        assert!(value["daily_degradation"]["total"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_json_result_round_trips() {
        let params = SimulationParameters::default().with_years(1);
        let result = simulate(&params);
        let report = SimulationReport::new(&params, &result);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        export_json(&path, &report).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let parsed: SimulationResult = serde_json::from_value(value["result"].clone()).unwrap();
        assert_eq!(parsed.len(), result.len());
        assert_eq!(parsed.final_day(), 365);
    }
}
