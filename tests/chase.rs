use atlas_intercept_calculator::propulsion::fuel::required_fuel_mass;
use atlas_intercept_calculator::propulsion::{PropulsionKind, catalog};
use atlas_intercept_calculator::transfer::{FailureReason, chase_estimate};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn now_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap()
}

#[test]
fn sweet_spot_launch_is_baseline_difficulty() {
    let now = now_epoch();
    let launch = now + Duration::days(60);
    let ion = catalog::lookup(PropulsionKind::Ion);

    let outcome = chase_estimate(ion, 1000.0, launch, now);

    assert!(outcome.feasible);
    assert!((outcome.delta_v_km_s - 8.0).abs() < 1e-12);
    assert_eq!(outcome.flight_time_days, 180);
    assert_eq!(outcome.arrival, Some(launch + Duration::days(180)));
    assert!(outcome.failure.is_none());
    assert!(outcome.explanation.contains("Mission successful"));
}

#[test]
fn whole_optimal_range_is_baseline_difficulty() {
    let now = now_epoch();
    let nuclear = catalog::lookup(PropulsionKind::Nuclear);
    for days in [30, 45, 90] {
        let outcome = chase_estimate(nuclear, 500.0, now + Duration::days(days), now);
        assert!((outcome.delta_v_km_s - 8.0).abs() < 1e-12, "days = {}", days);
        assert_eq!(outcome.flight_time_days, 180);
    }
}

#[test]
fn near_term_launch_pays_the_difficulty_penalty() {
    let now = now_epoch();
    let launch = now + Duration::days(10);
    let chemical = catalog::lookup(PropulsionKind::Chemical);

    // multiplier = 1 + |10 - 60| / 100 = 1.5
    let outcome = chase_estimate(chemical, 1000.0, launch, now);

    assert!(outcome.feasible);
    assert!((outcome.delta_v_km_s - 12.0).abs() < 1e-12);
    assert_eq!(outcome.flight_time_days, 225);
}

#[test]
fn days_from_now_floors_like_calendar_days() {
    let now = now_epoch();
    let chemical = catalog::lookup(PropulsionKind::Chemical);

    // 36 hours out floors to 1 day: multiplier 1.59.
    let ahead = chase_estimate(chemical, 1000.0, now + Duration::hours(36), now);
    assert!((ahead.delta_v_km_s - 8.0 * 1.59).abs() < 1e-9);

    // 12 hours in the past floors to -1 day: multiplier 1.61.
    let behind = chase_estimate(chemical, 1000.0, now - Duration::hours(12), now);
    assert!((behind.delta_v_km_s - 8.0 * 1.61).abs() < 1e-9);
}

#[test]
fn far_future_launch_exceeds_chemical_budget() {
    let now = now_epoch();
    let launch = now + Duration::days(200);
    let chemical = catalog::lookup(PropulsionKind::Chemical);

    // multiplier = 1 + |200 - 60| / 100 = 2.4 -> 19.2 km/s against a 15.0 budget.
    let outcome = chase_estimate(chemical, 1000.0, launch, now);

    assert!(!outcome.feasible);
    assert!((outcome.delta_v_km_s - 19.2).abs() < 1e-12);
    assert_eq!(outcome.arrival, None);

    let failure = outcome.failure.as_ref().expect("failure details");
    assert_eq!(failure.reason, FailureReason::InsufficientThrust);
    assert!(failure.suggestion.contains("earlier"));
    assert!(failure.suggestion.contains("nuclear"));

    // Fuel is priced against the burn the vehicle could actually deliver.
    let max_capable = required_fuel_mass(15.0, 450.0, 1000.0);
    assert!((outcome.fuel_mass_kg - max_capable).abs() < 1e-9);
}

#[test]
fn past_launch_suggests_waiting_for_geometry() {
    let now = now_epoch();
    let launch = now - Duration::days(30);
    let chemical = catalog::lookup(PropulsionKind::Chemical);

    // multiplier = 1 + |-30 - 60| / 100 = 1.9 -> 15.2 km/s, just over budget.
    let outcome = chase_estimate(chemical, 1000.0, launch, now);

    assert!(!outcome.feasible);
    let failure = outcome.failure.as_ref().expect("failure details");
    assert!(failure.suggestion.contains("later"));
}

#[test]
fn high_capability_drives_get_pointed_at_ion() {
    let now = now_epoch();
    let launch = now + Duration::days(300);
    let ion = catalog::lookup(PropulsionKind::Ion);

    // multiplier = 3.4 -> 27.2 km/s against the 25.0 ion budget.
    let outcome = chase_estimate(ion, 1000.0, launch, now);

    assert!(!outcome.feasible);
    let failure = outcome.failure.as_ref().expect("failure details");
    assert!(failure.suggestion.contains("ion"));
}

#[test]
fn solar_sail_flies_the_sweet_spot_without_fuel() {
    let now = now_epoch();
    let solar = catalog::lookup(PropulsionKind::Solar);

    let outcome = chase_estimate(solar, 1000.0, now + Duration::days(60), now);

    assert!(outcome.feasible);
    assert_eq!(outcome.fuel_mass_kg, 0.0);
}
