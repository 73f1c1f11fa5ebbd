//! Learned rule entities, one type per output table.

/// Observed callsign to designator pair. One per input record.
#[derive(Debug, Clone, PartialEq)]
pub struct ExactMapping {
    pub airline_icao: String,
    pub airline_iata: String,
    pub callsign: String,
    pub iata_flight: String,
    pub digits: u32,
}

/// `(num, suffix) -> digits` rule for one airline.
#[derive(Debug, Clone, PartialEq)]
pub struct NumSuffixRule {
    pub airline_icao: String,
    pub airline_iata: String,
    pub num: u32,
    pub suffix: String,
    pub digits: u32,
    pub support: usize,
    pub purity: f64,
}

/// `suffix -> delta` rule for one airline, where `digits = num + delta`.
#[derive(Debug, Clone, PartialEq)]
pub struct SuffixDeltaRule {
    pub airline_icao: String,
    pub airline_iata: String,
    pub suffix: String,
    pub delta: i64,
    pub support: usize,
    pub purity: f64,
}

/// Airline-wide fallback relationships between callsign and designator numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct AirlineConstant {
    pub airline_icao: String,
    pub airline_iata: String,
    /// Majority delta, present only when it passed the purity gate.
    pub constant_delta: Option<i64>,
    /// Purity of the majority delta whether accepted or not.
    pub constant_delta_purity: f64,
    /// String prefix `P` with `digits == P + num` for every record.
    pub constant_prefix: Option<String>,
    pub identity_rate: f64,
    pub rows_seen: usize,
    pub ns_rules_learned: usize,
    pub ns_rules_candidates: usize,
}

/// The four rule tables produced by one induction run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleModel {
    pub confirmed_mappings: Vec<ExactMapping>,
    pub num_suffix_rules: Vec<NumSuffixRule>,
    pub suffix_delta_rules: Vec<SuffixDeltaRule>,
    pub airline_constants: Vec<AirlineConstant>,
}

impl RuleModel {
    pub fn is_empty(&self) -> bool {
        self.confirmed_mappings.is_empty()
            && self.num_suffix_rules.is_empty()
            && self.suffix_delta_rules.is_empty()
            && self.airline_constants.is_empty()
    }
}
