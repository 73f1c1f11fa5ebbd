//! Induction option layering: defaults, then a TOML file, then CLI flags.
//!
//! The config file uses the option names as top-level keys:
//!
//! ```toml
//! ns_min_support = 3
//! ns_min_purity = 0.90
//! sd_min_support = 5
//! sd_min_purity = 0.85
//! delta_min_purity = 0.90
//! ```

use std::path::Path;

use anyhow::{Context, Result};

use flightmap_model::InductionOptions;

/// Thresholds given explicitly on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdOverrides {
    pub ns_min_support: Option<usize>,
    pub ns_min_purity: Option<f64>,
    pub sd_min_support: Option<usize>,
    pub sd_min_purity: Option<f64>,
    pub delta_min_purity: Option<f64>,
}

impl ThresholdOverrides {
    /// Replace every option that was given explicitly.
    pub fn apply(&self, mut options: InductionOptions) -> InductionOptions {
        if let Some(value) = self.ns_min_support {
            options.ns_min_support = value;
        }
        if let Some(value) = self.ns_min_purity {
            options.ns_min_purity = value;
        }
        if let Some(value) = self.sd_min_support {
            options.sd_min_support = value;
        }
        if let Some(value) = self.sd_min_purity {
            options.sd_min_purity = value;
        }
        if let Some(value) = self.delta_min_purity {
            options.delta_min_purity = value;
        }
        options
    }
}

/// Read induction options from a TOML file. Missing keys keep their defaults.
pub fn load_config_file(path: &Path) -> Result<InductionOptions> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
}

/// Resolve the effective options and check them.
pub fn resolve_options(
    config_file: Option<&Path>,
    overrides: &ThresholdOverrides,
) -> Result<InductionOptions> {
    let base = match config_file {
        Some(path) => load_config_file(path)?,
        None => InductionOptions::default(),
    };
    let options = overrides.apply(base);
    options.validate().context("invalid induction options")?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_values() {
        let overrides = ThresholdOverrides {
            sd_min_support: Some(2),
            ..ThresholdOverrides::default()
        };
        let options = overrides.apply(InductionOptions::default());
        assert_eq!(options.sd_min_support, 2);
        assert_eq!(options.ns_min_support, 3);
    }

    #[test]
    fn flags_win_over_config_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("flightmap.toml");
        std::fs::write(&path, "ns_min_support = 10\nsd_min_support = 7\n").expect("write");
        let overrides = ThresholdOverrides {
            ns_min_support: Some(4),
            ..ThresholdOverrides::default()
        };
        let options = resolve_options(Some(&path), &overrides).expect("resolve");
        assert_eq!(options.ns_min_support, 4);
        assert_eq!(options.sd_min_support, 7);
    }

    #[test]
    fn invalid_purity_is_rejected() {
        let overrides = ThresholdOverrides {
            ns_min_purity: Some(-0.1),
            ..ThresholdOverrides::default()
        };
        assert!(resolve_options(None, &overrides).is_err());
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("flightmap.toml");
        std::fs::write(&path, "min_purity = 0.5\n").expect("write");
        let err = resolve_options(Some(&path), &ThresholdOverrides::default())
            .expect_err("unknown key");
        assert!(err.to_string().contains("parsing config file"));
    }
}
