//! Fixed generation-scale configuration.
//!
//! There is no runtime configuration surface: the runner bakes one
//! production-scale config into the run. Tests use the small config
//! from `GeneratorConfig::default_test()`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of synthetic users to generate.
    pub user_count: usize,
    /// Bernoulli success probability for a journey ending in a conversion.
    pub conversion_rate: f64,
    /// First calendar day of the generation window.
    pub anchor_date: NaiveDate,
    /// Window length in days. Base dates and ledger dates both span it.
    pub window_days: u32,
    /// Journey length bounds, both inclusive.
    pub min_touchpoints: u32,
    pub max_touchpoints: u32,
    /// Session duration bounds in seconds, both inclusive.
    pub min_session_seconds: u32,
    pub max_session_seconds: u32,
    /// Order value bounds in USD for converted users.
    pub min_order_value: f64,
    pub max_order_value: f64,
    /// Daily per-campaign spend bounds in USD.
    pub min_spend_usd: f64,
    pub max_spend_usd: f64,
    /// Daily per-campaign impression bounds, both inclusive.
    pub min_impressions: u32,
    pub max_impressions: u32,
}

impl Default for GeneratorConfig {
    /// Production fixture scale: 2000 users over Jan-Mar 2024.
    fn default() -> Self {
        Self {
            user_count: 2000,
            conversion_rate: 0.18,
            anchor_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            window_days: 90,
            min_touchpoints: 1,
            max_touchpoints: 6,
            min_session_seconds: 15,
            max_session_seconds: 600,
            min_order_value: 29.99,
            max_order_value: 499.99,
            min_spend_usd: 50.0,
            max_spend_usd: 800.0,
            min_impressions: 500,
            max_impressions: 25_000,
        }
    }
}

impl GeneratorConfig {
    /// Small population for unit tests; same distributions.
    pub fn default_test() -> Self {
        Self {
            user_count: 50,
            ..Self::default()
        }
    }
}
