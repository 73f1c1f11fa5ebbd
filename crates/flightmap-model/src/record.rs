//! Parsed identifiers and the normalized flight record built from them.

use std::fmt;

/// Components of an ICAO radio callsign such as `EXS3CM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCallsign {
    /// Three-letter ICAO airline code (`EXS`).
    pub airline_icao: String,
    /// Numeric part as spoken over the radio (`3`).
    pub num: u32,
    /// Trailing operational letters, possibly empty (`CM`).
    pub suffix: String,
}

/// Components of an IATA commercial flight designator such as `LS239`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDesignator {
    /// Two or three character IATA airline code (`LS`).
    pub airline_iata: String,
    /// Numeric part of the designator (`239`).
    pub digits: u32,
    /// Canonical designator, airline code followed by the digits without
    /// leading zeros.
    pub full_designator: String,
}

/// A schedule row whose callsign and designator both parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRecord {
    pub airline_icao: String,
    pub airline_iata: String,
    /// Trimmed, uppercased callsign.
    pub callsign: String,
    pub num: u32,
    pub suffix: String,
    pub digits: u32,
    pub full_iata: String,
}

impl FlightRecord {
    pub fn new(callsign: &str, parsed: ParsedCallsign, designator: ParsedDesignator) -> Self {
        Self {
            airline_icao: parsed.airline_icao,
            airline_iata: designator.airline_iata,
            callsign: callsign.to_string(),
            num: parsed.num,
            suffix: parsed.suffix,
            digits: designator.digits,
            full_iata: designator.full_designator,
        }
    }

    /// Offset from the callsign number to the designator digits.
    pub fn delta(&self) -> i64 {
        i64::from(self.digits) - i64::from(self.num)
    }

    /// True when the callsign number is the designator number.
    pub fn is_identity(&self) -> bool {
        self.digits == self.num
    }

    pub fn key(&self) -> AirlineKey {
        AirlineKey::new(&self.airline_icao, &self.airline_iata)
    }
}

/// Airline identity used to group records: ICAO code plus IATA code.
///
/// Orders by ICAO first so grouped output is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AirlineKey {
    pub icao: String,
    pub iata: String,
}

impl AirlineKey {
    pub fn new(icao: &str, iata: &str) -> Self {
        Self {
            icao: icao.to_string(),
            iata: iata.to_string(),
        }
    }
}

impl fmt::Display for AirlineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.icao, self.iata)
    }
}
