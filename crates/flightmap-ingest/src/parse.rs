//! Callsign and flight designator parsing.
//!
//! Both parsers normalize their input (trim, ASCII uppercase) and either
//! return every component or nothing.

use std::sync::LazyLock;

use regex::Regex;

use flightmap_model::{ParsedCallsign, ParsedDesignator};

/// Three-letter airline code, digits, optional trailing letters (`EXS3CM`).
static CALLSIGN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{3})([0-9]+)([A-Z]*)$").expect("Invalid callsign regex")
});

/// Airline code, digits, optional single letter (`LS239`, `BA2777A`).
///
/// The airline code is two alphanumerics optionally followed by a letter.
static DESIGNATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z0-9]{2}[A-Z]?)([0-9]+)[A-Z]?$").expect("Invalid designator regex")
});

/// Trim and uppercase an identifier field.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Split an ICAO callsign into airline code, number and suffix.
pub fn parse_callsign(raw: &str) -> Option<ParsedCallsign> {
    let normalized = normalize_identifier(raw);
    let captures = CALLSIGN_REGEX.captures(&normalized)?;
    let num = captures[2].parse::<u32>().ok()?;
    Some(ParsedCallsign {
        airline_icao: captures[1].to_string(),
        num,
        suffix: captures[3].to_string(),
    })
}

/// Parse an IATA designator, falling back to digits plus the supplied airline.
///
/// A full designator (`LS239`) takes its airline code from the designator
/// itself. A digits-only value (`239`) is combined with `airline_iata`,
/// which must be two or three characters long.
pub fn parse_designator(number: &str, airline_iata: &str) -> Option<ParsedDesignator> {
    let raw = normalize_identifier(number);
    let airline = normalize_identifier(airline_iata);

    if let Some(captures) = DESIGNATOR_REGEX.captures(&raw) {
        let code = &captures[1];
        // Two digits would swallow the start of an all-digit flight number.
        if code.chars().any(|ch| ch.is_ascii_alphabetic()) {
            let digits = captures[2].parse::<u32>().ok()?;
            return Some(designator(code, digits));
        }
    }

    if is_all_digits(&raw) && matches!(airline.chars().count(), 2 | 3) {
        let digits = raw.parse::<u32>().ok()?;
        return Some(designator(&airline, digits));
    }

    None
}

fn designator(airline: &str, digits: u32) -> ParsedDesignator {
    ParsedDesignator {
        airline_iata: airline.to_string(),
        digits,
        full_designator: format!("{airline}{digits}"),
    }
}

fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_callsign_with_suffix() {
        let parsed = parse_callsign("EXS3CM").expect("valid callsign");
        assert_eq!(parsed.airline_icao, "EXS");
        assert_eq!(parsed.num, 3);
        assert_eq!(parsed.suffix, "CM");
    }

    #[test]
    fn parses_callsign_without_suffix() {
        let parsed = parse_callsign("BAW2777").expect("valid callsign");
        assert_eq!(parsed.airline_icao, "BAW");
        assert_eq!(parsed.num, 2777);
        assert_eq!(parsed.suffix, "");
    }

    #[test]
    fn callsign_is_normalized_before_matching() {
        let parsed = parse_callsign("  exs3cm ").expect("normalized callsign");
        assert_eq!(parsed.airline_icao, "EXS");
        assert_eq!(parsed.suffix, "CM");
    }

    #[test]
    fn rejects_malformed_callsigns() {
        for raw in ["", "EX3CM", "EXSA3", "EXS", "EXSCM", "abc", "EXS3C4", "EXS 3CM", "EXS-3"] {
            assert!(parse_callsign(raw).is_none(), "{raw:?} should not parse");
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        assert!(parse_callsign("EXS\u{0663}").is_none());
    }

    #[test]
    fn rejects_callsign_number_overflow() {
        assert!(parse_callsign("EXS99999999999").is_none());
    }

    #[test]
    fn parses_full_designator() {
        let parsed = parse_designator("LS239", "").expect("full designator");
        assert_eq!(parsed.airline_iata, "LS");
        assert_eq!(parsed.digits, 239);
        assert_eq!(parsed.full_designator, "LS239");
    }

    #[test]
    fn full_designator_ignores_supplied_airline() {
        let parsed = parse_designator("CA856", "LS").expect("full designator");
        assert_eq!(parsed.airline_iata, "CA");
        assert_eq!(parsed.full_designator, "CA856");
    }

    #[test]
    fn full_designator_accepts_alphanumeric_codes_and_trailing_letter() {
        let parsed = parse_designator("U22345", "").expect("digit in airline code");
        assert_eq!(parsed.airline_iata, "U2");
        assert_eq!(parsed.digits, 2345);

        let parsed = parse_designator("ba2777a", "").expect("trailing letter");
        assert_eq!(parsed.airline_iata, "BA");
        assert_eq!(parsed.digits, 2777);
        assert_eq!(parsed.full_designator, "BA2777");
    }

    #[test]
    fn parses_digits_only_with_airline() {
        let parsed = parse_designator("239", "ls").expect("digits only");
        assert_eq!(parsed.airline_iata, "LS");
        assert_eq!(parsed.digits, 239);
        assert_eq!(parsed.full_designator, "LS239");
    }

    #[test]
    fn canonical_designator_drops_leading_zeros() {
        let parsed = parse_designator("0239", "LS").expect("digits only");
        assert_eq!(parsed.full_designator, "LS239");
        let parsed = parse_designator("LS0239", "").expect("full designator");
        assert_eq!(parsed.full_designator, "LS239");
    }

    #[test]
    fn digits_only_requires_two_or_three_char_airline() {
        assert!(parse_designator("239", "").is_none());
        assert!(parse_designator("239", "L").is_none());
        assert!(parse_designator("239", "LSXX").is_none());
        assert!(parse_designator("239", "EZY").is_some());
    }

    #[test]
    fn rejects_malformed_designators() {
        for raw in ["", "LS", "LS23A9", "LS239AB", "LS-239", "1239X"] {
            assert!(parse_designator(raw, "LS").is_none(), "{raw:?} should not parse");
        }
    }
}
