//! Per-airline rule induction.
//!
//! Records are grouped by `(airline_icao, airline_iata)`. Each group yields
//! four tiers of rules:
//!
//! 1. exact callsign to designator pairs, one per record;
//! 2. `(num, suffix) -> digits` rules, gated by `ns_min_support`/`ns_min_purity`;
//! 3. `suffix -> delta` rules over suffixed records, gated by
//!    `sd_min_support`/`sd_min_purity`;
//! 4. one airline constant row with the majority delta (gated by
//!    `delta_min_purity`), a constant string prefix and the identity rate.
//!
//! Groups and partitions are visited in key order; records keep their input
//! order inside a partition, which is what majority-vote tie breaking sees.

use std::collections::BTreeMap;

use tracing::{debug, info};

use flightmap_model::{
    AirlineConstant, AirlineKey, ExactMapping, FlightRecord, InductionOptions, NumSuffixRule,
    RuleModel, SuffixDeltaRule,
};

use crate::prefix::constant_prefix;
use crate::vote::majority_vote;

/// Counters describing one induction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InductionStats {
    pub groups: usize,
    pub records: usize,
    pub parametric_candidates: usize,
    pub parametric_accepted: usize,
    pub delta_candidates: usize,
    pub delta_accepted: usize,
    pub constant_deltas_accepted: usize,
    pub constant_prefixes: usize,
}

impl InductionStats {
    fn absorb(&mut self, group: &GroupRules) {
        self.groups += 1;
        self.records += group.exact.len();
        self.parametric_candidates += group.ns_candidates;
        self.parametric_accepted += group.num_suffix.len();
        self.delta_candidates += group.sd_candidates;
        self.delta_accepted += group.suffix_delta.len();
        if group.constant.constant_delta.is_some() {
            self.constant_deltas_accepted += 1;
        }
        if group.constant.constant_prefix.is_some() {
            self.constant_prefixes += 1;
        }
    }
}

/// Learned model plus run statistics.
#[derive(Debug, Clone, Default)]
pub struct Induction {
    pub model: RuleModel,
    pub stats: InductionStats,
}

/// Group records by airline identity, preserving input order within a group.
pub fn group_by_airline(records: &[FlightRecord]) -> BTreeMap<AirlineKey, Vec<&FlightRecord>> {
    let mut groups: BTreeMap<AirlineKey, Vec<&FlightRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.key()).or_default().push(record);
    }
    groups
}

/// Induce all rule tiers from the admitted records.
pub fn induce(records: &[FlightRecord], options: &InductionOptions) -> Induction {
    let mut induction = Induction::default();

    for (key, group) in group_by_airline(records) {
        let rules = induce_group(&key, &group, options);
        debug!(
            airline = %key,
            rows = group.len(),
            ns_candidates = rules.ns_candidates,
            ns_accepted = rules.num_suffix.len(),
            sd_candidates = rules.sd_candidates,
            sd_accepted = rules.suffix_delta.len(),
            constant_delta = ?rules.constant.constant_delta,
            "airline group induced"
        );
        induction.stats.absorb(&rules);

        let model = &mut induction.model;
        model.confirmed_mappings.extend(rules.exact);
        model.num_suffix_rules.extend(rules.num_suffix);
        model.suffix_delta_rules.extend(rules.suffix_delta);
        model.airline_constants.push(rules.constant);
    }

    let stats = &induction.stats;
    info!(
        groups = stats.groups,
        records = stats.records,
        ns_rules = stats.parametric_accepted,
        ns_candidates = stats.parametric_candidates,
        sd_rules = stats.delta_accepted,
        sd_candidates = stats.delta_candidates,
        constant_deltas = stats.constant_deltas_accepted,
        "induction complete"
    );
    induction
}

struct GroupRules {
    exact: Vec<ExactMapping>,
    num_suffix: Vec<NumSuffixRule>,
    ns_candidates: usize,
    suffix_delta: Vec<SuffixDeltaRule>,
    sd_candidates: usize,
    constant: AirlineConstant,
}

fn induce_group(
    key: &AirlineKey,
    group: &[&FlightRecord],
    options: &InductionOptions,
) -> GroupRules {
    let exact = exact_mappings(key, group);
    let (num_suffix, ns_candidates) = num_suffix_rules(key, group, options);
    let (suffix_delta, sd_candidates) = suffix_delta_rules(key, group, options);
    let constant = airline_constant(key, group, options, num_suffix.len(), ns_candidates);
    GroupRules {
        exact,
        num_suffix,
        ns_candidates,
        suffix_delta,
        sd_candidates,
        constant,
    }
}

// Every occurrence is kept, including repeated callsigns.
fn exact_mappings(key: &AirlineKey, group: &[&FlightRecord]) -> Vec<ExactMapping> {
    group
        .iter()
        .map(|record| ExactMapping {
            airline_icao: key.icao.clone(),
            airline_iata: key.iata.clone(),
            callsign: record.callsign.clone(),
            iata_flight: record.full_iata.clone(),
            digits: record.digits,
        })
        .collect()
}

fn num_suffix_rules(
    key: &AirlineKey,
    group: &[&FlightRecord],
    options: &InductionOptions,
) -> (Vec<NumSuffixRule>, usize) {
    let mut partitions: BTreeMap<(u32, &str), Vec<u32>> = BTreeMap::new();
    for record in group {
        partitions
            .entry((record.num, record.suffix.as_str()))
            .or_default()
            .push(record.digits);
    }

    let candidates = partitions.len();
    let rules = partitions
        .into_iter()
        .filter_map(|((num, suffix), digits)| {
            let vote = majority_vote(digits);
            vote.accepted(options.ns_min_support, options.ns_min_purity)
                .then(|| NumSuffixRule {
                    airline_icao: key.icao.clone(),
                    airline_iata: key.iata.clone(),
                    num,
                    suffix: suffix.to_string(),
                    digits: vote.value,
                    support: vote.total,
                    purity: vote.purity(),
                })
        })
        .collect();
    (rules, candidates)
}

fn suffix_delta_rules(
    key: &AirlineKey,
    group: &[&FlightRecord],
    options: &InductionOptions,
) -> (Vec<SuffixDeltaRule>, usize) {
    let mut partitions: BTreeMap<&str, Vec<i64>> = BTreeMap::new();
    for record in group.iter().filter(|record| !record.suffix.is_empty()) {
        partitions
            .entry(record.suffix.as_str())
            .or_default()
            .push(record.delta());
    }

    let candidates = partitions.len();
    let rules = partitions
        .into_iter()
        .filter_map(|(suffix, deltas)| {
            let vote = majority_vote(deltas);
            vote.accepted(options.sd_min_support, options.sd_min_purity)
                .then(|| SuffixDeltaRule {
                    airline_icao: key.icao.clone(),
                    airline_iata: key.iata.clone(),
                    suffix: suffix.to_string(),
                    delta: vote.value,
                    support: vote.total,
                    purity: vote.purity(),
                })
        })
        .collect();
    (rules, candidates)
}

fn airline_constant(
    key: &AirlineKey,
    group: &[&FlightRecord],
    options: &InductionOptions,
    ns_rules_learned: usize,
    ns_rules_candidates: usize,
) -> AirlineConstant {
    let vote = majority_vote(group.iter().map(|record| record.delta()));
    let delta_purity = vote.purity();
    let constant_delta = (delta_purity >= options.delta_min_purity).then_some(vote.value);

    let identities = group.iter().filter(|record| record.is_identity()).count();
    let identity_rate = if group.is_empty() {
        0.0
    } else {
        identities as f64 / group.len() as f64
    };

    AirlineConstant {
        airline_icao: key.icao.clone(),
        airline_iata: key.iata.clone(),
        constant_delta,
        constant_delta_purity: delta_purity,
        constant_prefix: constant_prefix(group.iter().map(|record| (record.num, record.digits))),
        identity_rate,
        rows_seen: group.len(),
        ns_rules_learned,
        ns_rules_candidates,
    }
}
