use serde::{Deserialize, Serialize};

use super::money::Rounding;

/// Number of partners in a SIAP top report.
pub const DEFAULT_MAX_ENTRIES: usize = 20;

/// Tax-id placeholder for partners without a CUIT.
pub const MISSING_TAX_ID: &str = "SIN CUIT";

/// Configuration for ranking and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiapConfig {
    /// Maximum number of ranked partners. Never more than
    /// [`DEFAULT_MAX_ENTRIES`]; larger values are capped when ranking.
    pub max_entries: usize,
    /// Written in the tax-id field when a partner has none.
    pub missing_tax_id: String,
    /// Rounding applied to every amount in the file.
    pub rounding: Rounding,
    /// Rank only partners flagged as companies.
    pub companies_only: bool,
}

impl Default for SiapConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            missing_tax_id: MISSING_TAX_ID.into(),
            rounding: Rounding::default(),
            companies_only: true,
        }
    }
}

/// Builder for [`SiapConfig`].
///
/// # Example
///
/// ```
/// use siap_export::core::{Rounding, SiapConfigBuilder};
///
/// let config = SiapConfigBuilder::new()
///     .rounding(Rounding::HalfUp)
///     .companies_only(false)
///     .build();
/// assert_eq!(config.max_entries, 20);
/// ```
#[derive(Debug, Default)]
pub struct SiapConfigBuilder {
    config: SiapConfig,
}

impl SiapConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of ranked partners, capped at
    /// [`DEFAULT_MAX_ENTRIES`].
    pub fn max_entries(mut self, max: usize) -> Self {
        self.config.max_entries = max.min(DEFAULT_MAX_ENTRIES);
        self
    }

    /// Set the placeholder for a missing tax id.
    pub fn missing_tax_id(mut self, placeholder: impl Into<String>) -> Self {
        self.config.missing_tax_id = placeholder.into();
        self
    }

    /// Set the rounding mode.
    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.config.rounding = rounding;
        self
    }

    /// Include or exclude partners that are not companies.
    pub fn companies_only(mut self, only: bool) -> Self {
        self.config.companies_only = only;
        self
    }

    pub fn build(self) -> SiapConfig {
        self.config
    }
}

impl SiapConfig {
    /// Number of entries a report may hold: `max_entries`, never above
    /// [`DEFAULT_MAX_ENTRIES`].
    pub fn entry_limit(&self) -> usize {
        self.max_entries.min(DEFAULT_MAX_ENTRIES)
    }
}
