pub mod error;
pub mod options;
pub mod record;
pub mod rules;

pub use error::{ModelError, Result};
pub use options::{
    DEFAULT_DELTA_MIN_PURITY, DEFAULT_NS_MIN_PURITY, DEFAULT_NS_MIN_SUPPORT,
    DEFAULT_SD_MIN_PURITY, DEFAULT_SD_MIN_SUPPORT, InductionOptions,
};
pub use record::{AirlineKey, FlightRecord, ParsedCallsign, ParsedDesignator};
pub use rules::{AirlineConstant, ExactMapping, NumSuffixRule, RuleModel, SuffixDeltaRule};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_exposes_delta_and_identity() {
        let record = FlightRecord::new(
            "EXS3CM",
            ParsedCallsign {
                airline_icao: "EXS".to_string(),
                num: 3,
                suffix: "CM".to_string(),
            },
            ParsedDesignator {
                airline_iata: "LS".to_string(),
                digits: 239,
                full_designator: "LS239".to_string(),
            },
        );
        assert_eq!(record.delta(), 236);
        assert!(!record.is_identity());
        assert_eq!(record.key(), AirlineKey::new("EXS", "LS"));
    }

    #[test]
    fn empty_model_reports_no_rules() {
        let model = RuleModel::default();
        assert!(model.is_empty());
    }
}
