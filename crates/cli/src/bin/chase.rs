use std::path::PathBuf;

use atlas_intercept_calculator::api::{
    AnytimeChaseRequest, ChaseResponse, InterceptService, format_epoch,
};
use atlas_intercept_calculator::core::constants::AU_KM;
use atlas_intercept_calculator::core::vector::norm;
use atlas_intercept_calculator::ephemeris::target::InterstellarObject;
use atlas_intercept_calculator::export::outcome as export_outcome;
use atlas_intercept_calculator::transfer::MissionOutcome;
use chrono::Utc;
use clap::Parser;

/// Evaluate a fixed-date chase of 3I/ATLAS.
#[derive(Parser, Debug)]
#[command(author, version, about = "Fixed-date intercept estimator for 3I/ATLAS")]
struct Cli {
    /// Propulsion system identifier (chemical, ion, nuclear, solar)
    #[arg(long)]
    propulsion: String,

    /// Spacecraft dry mass in kg
    #[arg(long, default_value_t = 1000.0)]
    payload_mass: f64,

    /// Launch date (ISO-8601; 'Z' or offset suffix accepted)
    #[arg(long)]
    launch_date: String,

    /// Write the JSON response to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Also report the target's modelled state at the launch date
    #[arg(long, default_value_t = false)]
    target_state: bool,
}

fn main() -> anyhow::Result<()> {
    atlas_cli::logging::init();
    let cli = Cli::parse();

    let service = InterceptService::new();
    let request = AnytimeChaseRequest {
        propulsion: cli.propulsion.clone(),
        payload_mass: cli.payload_mass,
        launch_date: cli.launch_date.clone(),
    };
    let now = Utc::now();

    let outcome = service.chase_outcome(&request, now)?;
    print_report(&outcome);

    if cli.target_state {
        print_target_state(&outcome);
    }

    if let Some(path) = &cli.json {
        let response = ChaseResponse::from_outcome(&outcome);
        export_outcome::write_pretty(path, &response)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn print_report(outcome: &MissionOutcome) {
    println!("=== Chase Estimate ===");
    println!("Launch epoch   : {}", format_epoch(outcome.launch));
    match outcome.arrival {
        Some(arrival) => println!("Arrival epoch  : {}", format_epoch(arrival)),
        None => println!("Arrival epoch  : n/a"),
    }
    println!("Flight time    : {} days", outcome.flight_time_days);
    println!("Delta-V        : {:.2} km/s", outcome.delta_v_km_s);
    println!("Fuel required  : {:.1} kg", outcome.fuel_mass_kg);
    println!(
        "Verdict        : {}",
        if outcome.feasible { "intercept" } else { "miss" }
    );
    println!("{}", outcome.explanation);
    if let Some(failure) = &outcome.failure {
        println!("Failure reason : {}", failure.reason.as_str());
        println!("Suggestion     : {}", failure.suggestion);
    }
    println!("Note: {}", outcome.educational_note);
}

fn print_target_state(outcome: &MissionOutcome) {
    // 2024-01-01T00:00:00Z, the target model's reference epoch.
    const REFERENCE_EPOCH_UNIX_S: i64 = 1_704_067_200;

    let days = (outcome.launch.timestamp() - REFERENCE_EPOCH_UNIX_S) as f64 / 86_400.0;
    let object = InterstellarObject::default();
    let state = object.state_at_days(days);
    let range_km = norm(&state.position_km);
    let speed_km_s = norm(&state.velocity_km_s);

    println!("=== {} at launch ===", object.name);
    println!("Days past epoch : {:.1}", days);
    println!(
        "Range from Sun  : {:.3} AU ({:.3e} km)",
        range_km / AU_KM,
        range_km
    );
    println!("Speed           : {:.2} km/s", speed_km_s);
}
