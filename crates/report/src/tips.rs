//! Battery care tips.
//!
//! Tips are picked at random from those relevant to the parameters. The
//! random source is passed in so callers decide how it is seeded.

use battery_soh_domain::enums::ChargingHabit;
use battery_soh_domain::value_objects::parameters::SimulationParameters;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Tips that apply to any battery.
pub const GENERAL_TIPS: &[&str] = &[
    "Avoid leaving your device at 100% charge for long periods.",
    "Store batteries at around 50% charge if unused for weeks.",
    "Unplug the charger once the battery is full.",
    "Use the charger that came with your device or a certified one.",
];

const HEAT_TIP: &str = "Keep the battery away from heat: every 15 °C above 25 °C speeds up aging by almost three times.";
const PARTIAL_CHARGE_TIP: &str = "Charging between 20% and 80% instead of to 100% slows cycle aging.";
const FAST_CHARGE_TIP: &str = "Prefer slow charging overnight; fast charging wears the battery faster.";
const SHALLOW_CYCLE_TIP: &str = "Shallow discharges age the battery less than draining it completely.";
const CYCLE_COUNT_TIP: &str = "Fewer charge cycles per week mean a longer battery life.";

/// Tips relevant to the given parameters, most specific first.
#[must_use]
pub fn tips_for(params: &SimulationParameters) -> Vec<&'static str> {
    let mut tips = Vec::new();
    if params.average_temperature_c > 30.0 {
        tips.push(HEAT_TIP);
    }
    match params.charging_habit {
        ChargingHabit::Full => tips.push(PARTIAL_CHARGE_TIP),
        ChargingHabit::Fast => tips.push(FAST_CHARGE_TIP),
        ChargingHabit::Partial | ChargingHabit::Slow => {}
    }
    if params.depth_of_discharge_pct > 80.0 {
        tips.push(SHALLOW_CYCLE_TIP);
    }
    if params.charge_cycles_per_week > 14.0 {
        tips.push(CYCLE_COUNT_TIP);
    }
    tips.extend_from_slice(GENERAL_TIPS);
    tips
}

/// Picks one tip from `tips`.
#[must_use]
pub fn pick_from<'a, R: Rng + ?Sized>(tips: &[&'a str], rng: &mut R) -> Option<&'a str> {
    tips.choose(rng).copied()
}

/// Picks a tip relevant to the parameters.
#[must_use]
pub fn pick_tip<R: Rng + ?Sized>(params: &SimulationParameters, rng: &mut R) -> &'static str {
    pick_from(&tips_for(params), rng).unwrap_or(GENERAL_TIPS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_same_seed_same_tip() {
        let params = SimulationParameters::default();
        let first = pick_tip(&params, &mut StdRng::seed_from_u64(7));
        let second = pick_tip(&params, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
        assert!(tips_for(&params).contains(&first));
    }

    #[test]
    fn test_tips_follow_parameters() {
        let hot_fast = SimulationParameters::default()
            .with_temperature(45.0)
            .with_charging_habit(ChargingHabit::Fast)
            .with_depth_of_discharge(100.0)
            .with_charge_cycles_per_week(21.0);
        let tips = tips_for(&hot_fast);
        assert_eq!(
            &tips[..4],
            &[HEAT_TIP, FAST_CHARGE_TIP, SHALLOW_CYCLE_TIP, CYCLE_COUNT_TIP]
        );

        let gentle = SimulationParameters::default()
            .with_charging_habit(ChargingHabit::Partial)
            .with_depth_of_discharge(50.0);
        assert_eq!(tips_for(&gentle), GENERAL_TIPS.to_vec());
    }

    #[test]
    fn test_pick_from_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_from(&[], &mut rng), None);
    }

    #[test]
    fn test_seeded_picks_cover_several_tips() {
        let params = SimulationParameters::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen: Vec<&str> = (0..200).map(|_| pick_tip(&params, &mut rng)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert!(seen.len() > 1);
    }
}
