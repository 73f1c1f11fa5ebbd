//! Acceptance thresholds for rule induction.

use serde::Deserialize;

use crate::error::{ModelError, Result};

pub const DEFAULT_NS_MIN_SUPPORT: usize = 3;
pub const DEFAULT_NS_MIN_PURITY: f64 = 0.90;
pub const DEFAULT_SD_MIN_SUPPORT: usize = 5;
pub const DEFAULT_SD_MIN_PURITY: f64 = 0.85;
pub const DEFAULT_DELTA_MIN_PURITY: f64 = 0.90;

/// Options controlling which candidate rules are accepted.
///
/// Every field has a default, so a partial TOML table deserializes into a
/// complete set of options.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InductionOptions {
    /// Minimum observations for a `(num, suffix)` rule.
    pub ns_min_support: usize,
    /// Minimum majority share for a `(num, suffix)` rule.
    pub ns_min_purity: f64,
    /// Minimum observations for a suffix delta rule.
    pub sd_min_support: usize,
    /// Minimum majority share for a suffix delta rule.
    pub sd_min_purity: f64,
    /// Minimum majority share for the airline-wide constant delta.
    pub delta_min_purity: f64,
}

impl Default for InductionOptions {
    fn default() -> Self {
        Self {
            ns_min_support: DEFAULT_NS_MIN_SUPPORT,
            ns_min_purity: DEFAULT_NS_MIN_PURITY,
            sd_min_support: DEFAULT_SD_MIN_SUPPORT,
            sd_min_purity: DEFAULT_SD_MIN_PURITY,
            delta_min_purity: DEFAULT_DELTA_MIN_PURITY,
        }
    }
}

impl InductionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ns_gate(mut self, min_support: usize, min_purity: f64) -> Self {
        self.ns_min_support = min_support;
        self.ns_min_purity = min_purity;
        self
    }

    #[must_use]
    pub fn with_sd_gate(mut self, min_support: usize, min_purity: f64) -> Self {
        self.sd_min_support = min_support;
        self.sd_min_purity = min_purity;
        self
    }

    #[must_use]
    pub fn with_delta_min_purity(mut self, min_purity: f64) -> Self {
        self.delta_min_purity = min_purity;
        self
    }

    /// Check that every purity threshold is a finite fraction.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidThreshold`] for the first purity outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("ns_min_purity", self.ns_min_purity),
            ("sd_min_purity", self.sd_min_purity),
            ("delta_min_purity", self.delta_min_purity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ModelError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}
