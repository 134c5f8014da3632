use std::io::Write;
use std::path::{Path, PathBuf};

use atlas_intercept_calculator::api::{InterceptService, OptimalWindowRequest, format_epoch};
use atlas_intercept_calculator::config::{SearchTuning, load_tuning};
use atlas_intercept_calculator::export::windows as export_windows;
use atlas_intercept_calculator::transfer::TransferWindow;
use chrono::Utc;
use clap::Parser;

/// Scan the launch-window grid and rank feasible intercepts.
#[derive(Parser, Debug)]
#[command(author, version, about = "Intercept window search for 3I/ATLAS")]
struct Cli {
    /// Propulsion system identifier (chemical, ion, nuclear, solar)
    #[arg(long)]
    propulsion: String,

    /// Spacecraft dry mass in kg
    #[arg(long, default_value_t = 1000.0)]
    payload_mass: f64,

    /// Override the search horizon in days
    #[arg(long)]
    horizon_days: Option<u32>,

    /// Tuning file (TOML or YAML) overriding the default search grid
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Output CSV file (use '-' for stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the full JSON response instead of the table
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    atlas_cli::logging::init();
    let cli = Cli::parse();

    let mut tuning = match &cli.tuning {
        Some(path) => load_tuning(path)?,
        None => SearchTuning::default(),
    };
    if let Some(horizon) = cli.horizon_days {
        tuning.search_horizon_days = horizon;
    }

    let service = InterceptService::with_tuning(tuning);
    let request = OptimalWindowRequest {
        propulsion: cli.propulsion.clone(),
        payload_mass: cli.payload_mass,
    };
    let now = Utc::now();

    let ranked = service.ranked_windows(&request, now)?;

    if cli.json {
        let response = service.optimal_window(&request, now)?;
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else if ranked.is_empty() {
        println!(
            "No feasible intercept windows found with {} propulsion system.",
            cli.propulsion
        );
        println!("Try nuclear or ion propulsion for better performance.");
    } else {
        print_table(&ranked);
    }

    if let Some(output) = &cli.output {
        write_csv(output, &ranked)?;
    }

    Ok(())
}

fn print_table(windows: &[TransferWindow]) {
    println!("=== Intercept Windows (best first) ===");
    println!(
        "{:<3} {:<22} {:<22} {:>8} {:>10} {:>12} {:>7}",
        "#", "Launch", "Arrival", "TOF (d)", "dv (km/s)", "Fuel (kg)", "Score"
    );
    for (index, window) in windows.iter().enumerate() {
        println!(
            "{:<3} {:<22} {:<22} {:>8} {:>10.2} {:>12.1} {:>7.2}",
            index + 1,
            format_epoch(window.launch),
            format_epoch(window.arrival),
            window.flight_time_days,
            window.delta_v_km_s,
            window.fuel_required_kg,
            window.efficiency_score,
        );
    }
}

fn write_csv(path: &Path, windows: &[TransferWindow]) -> anyhow::Result<()> {
    let mut writer = export_windows::writer_for_path(path)?;
    export_windows::write_header(writer.as_mut())?;
    for window in windows {
        let launch = format_epoch(window.launch);
        let arrival = format_epoch(window.arrival);
        export_windows::Record {
            launch_date: &launch,
            arrival_date: &arrival,
            flight_time_days: window.flight_time_days,
            delta_v_km_s: window.delta_v_km_s,
            fuel_required_kg: window.fuel_required_kg,
            efficiency_score: window.efficiency_score,
        }
        .write_to(writer.as_mut())?;
    }
    writer.flush()?;
    Ok(())
}
