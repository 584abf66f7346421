//! Command Line Interface for the battery State-of-Health estimator.
use anyhow::{Context, Result};
use battery_soh_domain::enums::{ChargingHabit, HealthBand};
use battery_soh_domain::value_objects::parameters::{DAYS_PER_YEAR, SimulationParameters, limits};
use battery_soh_report::chart::{ChartModel, render_text};
use battery_soh_report::csv::{DEFAULT_FILE_NAME, export_csv};
use battery_soh_report::json::{SimulationReport, export_json};
use battery_soh_report::summary::Summary;
use battery_soh_report::tips::pick_tip;
use battery_soh_simulation::comparison::compare_charging_habits;
use battery_soh_simulation::degradation::{DailyDegradation, simulate};
use battery_soh_simulation::threshold::{EOL_THRESHOLD_PCT, SEVERE_THRESHOLD_PCT};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use prettytable::{Table, row};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "battery-soh")]
#[command(about = "Battery Health & Degradation Estimator (simulated data)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate SoH decay and print the summary and chart
    Simulate {
        #[command(flatten)]
        battery: BatteryArgs,

        /// Charging habit
        #[arg(long, value_enum, default_value_t = HabitArg::Full)]
        habit: HabitArg,

        /// Write the simulated series as CSV
        #[arg(
            long,
            env = "BATTERY_SOH_CSV",
            num_args = 0..=1,
            default_missing_value = DEFAULT_FILE_NAME
        )]
        csv: Option<PathBuf>,

        /// Write parameters and results as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Do not draw the chart
        #[arg(long)]
        no_chart: bool,

        /// Do not print a care tip
        #[arg(long)]
        no_tip: bool,

        /// Seed for the tip selection
        #[arg(long)]
        seed: Option<u64>,

        /// Chart width in characters
        #[arg(long, default_value_t = 60)]
        width: usize,

        /// Chart height in characters
        #[arg(long, default_value_t = 16)]
        height: usize,
    },
    /// Compare all charging habits with the same usage
    Compare {
        #[command(flatten)]
        battery: BatteryArgs,
    },
    /// Show where the daily degradation comes from
    Breakdown {
        #[command(flatten)]
        battery: BatteryArgs,

        /// Charging habit
        #[arg(long, value_enum, default_value_t = HabitArg::Full)]
        habit: HabitArg,
    },
}

/// Usage parameters shared by all commands.
#[derive(Args)]
struct BatteryArgs {
    /// Initial battery capacity (mAh)
    #[arg(long, default_value_t = 4000.0)]
    capacity: f64,

    /// Charge cycles per week
    #[arg(long, default_value_t = 7.0)]
    cycles: f64,

    /// Average operating temperature (°C)
    #[arg(long, default_value_t = 25.0)]
    temperature: f64,

    /// Average depth of discharge (%)
    #[arg(long, default_value_t = 80.0)]
    dod: f64,

    /// Calendar aging impact (0 = none, 1 = high)
    #[arg(long, default_value_t = 0.2)]
    calendar_aging: f64,

    /// Years to simulate
    #[arg(
        long,
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(
            i64::from(*limits::YEARS.start())..=i64::from(*limits::YEARS.end())
        )
    )]
    years: u32,
}

impl BatteryArgs {
    fn to_parameters(&self, habit: ChargingHabit) -> Result<SimulationParameters> {
        let params = SimulationParameters::default()
            .with_initial_capacity(self.capacity)
            .with_charge_cycles_per_week(self.cycles)
            .with_temperature(self.temperature)
            .with_charging_habit(habit)
            .with_depth_of_discharge(self.dod)
            .with_calendar_aging(self.calendar_aging)
            .with_years(self.years);
        params
            .validate()
            .context("invalid simulation parameters")?;
        debug!(?params, "Parameters accepted");
        Ok(params)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum HabitArg {
    /// Charge to 100%
    Full,
    /// Partial charge (20-80%)
    Partial,
    /// Fast charging
    Fast,
    /// Slow charging
    Slow,
}

impl From<HabitArg> for ChargingHabit {
    fn from(arg: HabitArg) -> Self {
        match arg {
            HabitArg::Full => ChargingHabit::Full,
            HabitArg::Partial => ChargingHabit::Partial,
            HabitArg::Fast => ChargingHabit::Fast,
            HabitArg::Slow => ChargingHabit::Slow,
        }
    }
}

fn format_crossing(year: Option<f64>) -> String {
    year.map_or_else(|| "-".to_string(), |y| format!("{y:.1} yr"))
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Simulate {
            battery,
            habit,
            csv,
            json,
            no_chart,
            no_tip,
            seed,
            width,
            height,
        } => {
            let params = battery.to_parameters((*habit).into())?;

            println!("🔋 Battery Health & Degradation Estimator (Simulated Data)");
            println!(
                "⚙️  {} | {} cycles/week | {} °C | {}% DoD | calendar aging {}",
                params.charging_habit,
                params.charge_cycles_per_week,
                params.average_temperature_c,
                params.depth_of_discharge_pct,
                params.calendar_aging_factor
            );

            let result = simulate(&params);

            if !*no_chart {
                println!();
                print!("{}", render_text(&ChartModel::from_result(&result), *width, *height));
            }

            println!();
            println!("📊 {}", Summary::new(&params, &result));

            if let Some(path) = csv {
                export_csv(path, &result)
                    .with_context(|| format!("exporting CSV to {}", path.display()))?;
                println!("\n📥 Simulation data written to {}", path.display());
            }

            if let Some(path) = json {
                export_json(path, &SimulationReport::new(&params, &result))
                    .with_context(|| format!("exporting JSON to {}", path.display()))?;
                println!("📥 Report written to {}", path.display());
            }

            if !*no_tip {
                let tip = match seed {
                    Some(seed) => pick_tip(&params, &mut StdRng::seed_from_u64(*seed)),
                    None => pick_tip(&params, &mut rand::rng()),
                };
                println!("\n💡 Tip: {tip}");
            }
        }
        Commands::Compare { battery } => {
            let params = battery.to_parameters(ChargingHabit::default())?;
            info!(horizon_days = params.horizon_days, "Comparing charging habits");

            let rows = compare_charging_habits(&params);

            println!(
                "🔋 Charging habit comparison over {} years",
                params.horizon_years()
            );
            let mut table = Table::new();
            table.set_titles(row![
                "Habit",
                "Factor",
                "Final SoH (%)",
                "Final capacity (mAh)",
                "80% crossing",
                "60% crossing",
                "Health"
            ]);
            for r in &rows {
                table.add_row(row![
                    r.habit.label(),
                    format!("{:.1}", r.habit.habit_factor()),
                    format!("{:.2}", r.final_soh_pct),
                    format!("{:.0}", r.final_capacity_mah),
                    format_crossing(r.crossings.year(EOL_THRESHOLD_PCT)),
                    format_crossing(r.crossings.year(SEVERE_THRESHOLD_PCT)),
                    HealthBand::from_soh(r.final_soh_pct).to_string()
                ]);
            }
            table.printstd();
        }
        Commands::Breakdown { battery, habit } => {
            let params = battery.to_parameters((*habit).into())?;
            let d = DailyDegradation::from_parameters(&params);

            println!("🔬 Daily degradation breakdown");
            println!("════════════════════════════════════");
            println!("Cycles per day:        {:.4}", d.cycles_per_day);
            println!("Cycle aging:           {:.6} %/day", d.cycle);
            println!("Temperature factor:    {:.4}x", d.temperature_factor);
            println!("Cycle aging at temp:   {:.6} %/day", d.temperature_scaled_cycle());
            println!("Calendar aging:        {:.6} %/day", d.calendar);
            println!("Total:                 {:.6} %/day", d.total);
            println!(
                "Total per year:        {:.4} %/year",
                d.total * f64::from(DAYS_PER_YEAR)
            );
            println!("════════════════════════════════════");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_simulate_defaults_match_form() {
        let cli = Cli::try_parse_from(["battery-soh", "simulate"]).unwrap();
        let Commands::Simulate { battery, habit, .. } = cli.command else {
            panic!("expected simulate");
        };
        let params = battery.to_parameters(habit.into()).unwrap();
        assert_eq!(params, SimulationParameters::default());
    }

    #[test]
    fn test_years_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["battery-soh", "compare", "--years", "11"]).is_err());
        assert!(Cli::try_parse_from(["battery-soh", "compare", "--years", "0"]).is_err());
    }

    #[test]
    fn test_out_of_range_parameters_rejected() {
        let cli = Cli::try_parse_from(["battery-soh", "breakdown", "--temperature", "75"]).unwrap();
        let Commands::Breakdown { battery, habit } = cli.command else {
            panic!("expected breakdown");
        };
        assert!(battery.to_parameters(habit.into()).is_err());
    }

    #[test]
    fn test_habit_argument() {
        let cli = Cli::try_parse_from(["battery-soh", "simulate", "--habit", "partial"]).unwrap();
        let Commands::Simulate { habit, .. } = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(ChargingHabit::from(habit), ChargingHabit::Partial);
    }
}
