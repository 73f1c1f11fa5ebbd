//! Property tests: every emitted rule honours the configured gates.

use proptest::prelude::*;

use flightmap_ingest::{parse_callsign, parse_designator};
use flightmap_induce::induce;
use flightmap_model::{FlightRecord, InductionOptions};

fn observation() -> impl Strategy<Value = (String, u32, String, u32)> {
    (
        prop::sample::select(vec!["EXS", "BAW"]),
        0u32..20,
        prop::sample::select(vec!["", "CM", "A"]),
        0u32..3000,
    )
        .prop_map(|(icao, num, suffix, digits)| (icao.to_string(), num, suffix.to_string(), digits))
}

fn build_records(observations: &[(String, u32, String, u32)]) -> Vec<FlightRecord> {
    observations
        .iter()
        .map(|(icao, num, suffix, digits)| {
            let callsign = format!("{icao}{num}{suffix}");
            let iata = if icao == "EXS" { "LS" } else { "BA" };
            let parsed = parse_callsign(&callsign).expect("generated callsign parses");
            let designator =
                parse_designator(&format!("{iata}{digits}"), iata).expect("generated designator");
            FlightRecord::new(&callsign, parsed, designator)
        })
        .collect()
}

proptest! {
    #[test]
    fn emitted_rules_pass_their_gates(
        observations in prop::collection::vec(observation(), 0..60),
        ns_min_support in 1usize..5,
        sd_min_support in 1usize..5,
        min_purity in 0.0f64..=1.0,
    ) {
        let records = build_records(&observations);
        let options = InductionOptions::default()
            .with_ns_gate(ns_min_support, min_purity)
            .with_sd_gate(sd_min_support, min_purity)
            .with_delta_min_purity(min_purity);
        let induction = induce(&records, &options);
        let model = &induction.model;

        prop_assert_eq!(model.confirmed_mappings.len(), records.len());
        prop_assert_eq!(model.airline_constants.len(), induction.stats.groups);

        for rule in &model.num_suffix_rules {
            prop_assert!(rule.support >= ns_min_support);
            prop_assert!(rule.purity >= min_purity && rule.purity <= 1.0);
        }
        for rule in &model.suffix_delta_rules {
            prop_assert!(!rule.suffix.is_empty());
            prop_assert!(rule.support >= sd_min_support);
            prop_assert!(rule.purity >= min_purity && rule.purity <= 1.0);
        }
        for constant in &model.airline_constants {
            prop_assert!(constant.constant_delta_purity <= 1.0);
            if constant.constant_delta.is_some() {
                prop_assert!(constant.constant_delta_purity >= min_purity);
            }
            prop_assert!((0.0..=1.0).contains(&constant.identity_rate));
        }
    }
}
