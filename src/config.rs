use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use omnyom_order::PriceTable;
use omnyom_schedule::{
    DEFAULT_CALENDAR_WEEKS, DEFAULT_MAX_LEAD_DAYS, DEFAULT_MIN_LEAD_DAYS, EligibilityWindow,
};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub eligibility: EligibilityConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON log lines instead of the console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct EligibilityConfig {
    #[serde(default = "default_min_lead_days")]
    pub min_lead_days: u16,
    #[serde(default = "default_max_lead_days")]
    pub max_lead_days: u16,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            min_lead_days: default_min_lead_days(),
            max_lead_days: default_max_lead_days(),
        }
    }
}

impl EligibilityConfig {
    pub fn window(&self) -> EligibilityWindow {
        EligibilityWindow {
            min_lead_days: self.min_lead_days,
            max_lead_days: self.max_lead_days,
        }
    }
}

fn default_min_lead_days() -> u16 {
    DEFAULT_MIN_LEAD_DAYS
}

fn default_max_lead_days() -> u16 {
    DEFAULT_MAX_LEAD_DAYS
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarConfig {
    #[serde(default = "default_min_weeks")]
    pub min_weeks: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            min_weeks: default_min_weeks(),
        }
    }
}

fn default_min_weeks() -> u32 {
    DEFAULT_CALENDAR_WEEKS
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingConfig {
    pub one_week: u64,
    pub two_weeks: u64,
    pub four_weeks: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let prices = PriceTable::default();

        Self {
            one_week: prices.one_week,
            two_weeks: prices.two_weeks,
            four_weeks: prices.four_weeks,
        }
    }
}

impl PricingConfig {
    pub fn table(&self) -> PriceTable {
        PriceTable {
            one_week: self.one_week,
            two_weeks: self.two_weeks,
            four_weeks: self.four_weeks,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (OMNYOM__ELIGIBILITY__MAX_LEAD_DAYS, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let prices = PriceTable::default();
        let mut builder = ConfigBuilder::builder()
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.json", false)?
            .set_default("eligibility.min_lead_days", i64::from(DEFAULT_MIN_LEAD_DAYS))?
            .set_default("eligibility.max_lead_days", i64::from(DEFAULT_MAX_LEAD_DAYS))?
            .set_default("calendar.min_weeks", i64::from(DEFAULT_CALENDAR_WEEKS))?
            .set_default("pricing.one_week", prices.one_week as i64)?
            .set_default("pricing.two_weeks", prices.two_weeks as i64)?
            .set_default("pricing.four_weeks", prices.four_weeks as i64)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("OMNYOM")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.eligibility.min_lead_days > self.eligibility.max_lead_days {
            return Err(format!(
                "eligibility.min_lead_days ({}) must not exceed eligibility.max_lead_days ({})",
                self.eligibility.min_lead_days, self.eligibility.max_lead_days
            ));
        }
        if self.calendar.min_weeks == 0 {
            return Err("calendar.min_weeks must be at least 1".to_string());
        }
        if self.pricing.one_week == 0 || self.pricing.two_weeks == 0 || self.pricing.four_weeks == 0
        {
            return Err("pricing entries must be greater than 0".to_string());
        }
        Ok(())
    }
}
