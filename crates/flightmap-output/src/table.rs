//! Fixed column layouts for the four model tables.

use flightmap_model::{AirlineConstant, ExactMapping, NumSuffixRule, SuffixDeltaRule};

/// A row type with a fixed file name and column order.
pub trait ModelTable {
    /// File name inside the output directory.
    const FILE_NAME: &'static str;
    /// Header row, in output order.
    const COLUMNS: &'static [&'static str];

    /// Field values in [`COLUMNS`](Self::COLUMNS) order.
    fn fields(&self) -> Vec<String>;
}

/// Render a fraction with four decimal places.
pub fn format_ratio(value: f64) -> String {
    format!("{value:.4}")
}

fn optional<T: ToString>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

impl ModelTable for ExactMapping {
    const FILE_NAME: &'static str = "confirmed_mappings.csv";
    const COLUMNS: &'static [&'static str] = &[
        "airline_icao",
        "airline_iata",
        "callsign",
        "iata_flight",
        "digits",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.airline_icao.clone(),
            self.airline_iata.clone(),
            self.callsign.clone(),
            self.iata_flight.clone(),
            self.digits.to_string(),
        ]
    }
}

impl ModelTable for NumSuffixRule {
    const FILE_NAME: &'static str = "num_suffix_rules.csv";
    const COLUMNS: &'static [&'static str] = &[
        "airline_icao",
        "airline_iata",
        "num",
        "suffix",
        "digits",
        "support",
        "purity",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.airline_icao.clone(),
            self.airline_iata.clone(),
            self.num.to_string(),
            self.suffix.clone(),
            self.digits.to_string(),
            self.support.to_string(),
            format_ratio(self.purity),
        ]
    }
}

impl ModelTable for SuffixDeltaRule {
    const FILE_NAME: &'static str = "suffix_delta_rules.csv";
    const COLUMNS: &'static [&'static str] = &[
        "airline_icao",
        "airline_iata",
        "suffix",
        "delta",
        "support",
        "purity",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.airline_icao.clone(),
            self.airline_iata.clone(),
            self.suffix.clone(),
            self.delta.to_string(),
            self.support.to_string(),
            format_ratio(self.purity),
        ]
    }
}

impl ModelTable for AirlineConstant {
    const FILE_NAME: &'static str = "airline_constants.csv";
    const COLUMNS: &'static [&'static str] = &[
        "airline_icao",
        "airline_iata",
        "constant_delta",
        "constant_delta_purity",
        "constant_prefix",
        "identity_rate",
        "rows_seen",
        "ns_rules_learned",
        "ns_rules_candidates",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.airline_icao.clone(),
            self.airline_iata.clone(),
            optional(self.constant_delta.as_ref()),
            format_ratio(self.constant_delta_purity),
            optional(self.constant_prefix.as_ref()),
            format_ratio(self.identity_rate),
            self.rows_seen.to_string(),
            self.ns_rules_learned.to_string(),
            self.ns_rules_candidates.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_use_four_decimals() {
        assert_eq!(format_ratio(1.0), "1.0000");
        assert_eq!(format_ratio(0.75), "0.7500");
        assert_eq!(format_ratio(2.0 / 3.0), "0.6667");
        assert_eq!(format_ratio(0.0), "0.0000");
    }

    #[test]
    fn blank_constant_fields_render_empty() {
        let constant = AirlineConstant {
            airline_icao: "BAW".to_string(),
            airline_iata: "BA".to_string(),
            constant_delta: None,
            constant_delta_purity: 0.5,
            constant_prefix: None,
            identity_rate: 0.5,
            rows_seen: 4,
            ns_rules_learned: 0,
            ns_rules_candidates: 4,
        };
        assert_eq!(
            constant.fields(),
            vec!["BAW", "BA", "", "0.5000", "", "0.5000", "4", "0", "4"]
        );
    }

    #[test]
    fn negative_deltas_render_with_sign() {
        let rule = SuffixDeltaRule {
            airline_icao: "EXS".to_string(),
            airline_iata: "LS".to_string(),
            suffix: "CM".to_string(),
            delta: -12,
            support: 5,
            purity: 1.0,
        };
        assert_eq!(rule.fields()[3], "-12");
    }

    #[test]
    fn every_row_matches_its_header_width() {
        assert_eq!(ExactMapping::COLUMNS.len(), 5);
        assert_eq!(NumSuffixRule::COLUMNS.len(), 7);
        assert_eq!(SuffixDeltaRule::COLUMNS.len(), 6);
        assert_eq!(AirlineConstant::COLUMNS.len(), 9);
    }
}
