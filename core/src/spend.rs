//! Daily advertising-spend ledger generation.
//!
//! Independent of any user journey: the ledger covers every
//! (day, paid channel, concrete campaign) triple over the same
//! window the journeys use. Sentinel campaign slots are skipped, so
//! every emitted row carries a real campaign name.

use crate::{
    config::GeneratorConfig,
    journey::round_cents,
    rng::GeneratorRng,
    taxonomy::{Channel, TaxonomyRegistry},
};
use chrono::{Duration, NaiveDate};

/// One day of spend for one campaign on one paid channel.
#[derive(Debug, Clone)]
pub struct SpendRow {
    pub spend_date: NaiveDate,
    pub channel: Channel,
    pub campaign: &'static str,
    pub spend_usd: f64,
    pub impressions: u32,
}

pub struct SpendLedgerGenerator {
    config: GeneratorConfig,
}

impl SpendLedgerGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Emit rows in (date, channel, campaign)-nested order. Row count
    /// is exactly window_days x the paid subset's concrete campaigns.
    pub fn generate_ledger(&self, rng: &mut GeneratorRng) -> Vec<SpendRow> {
        let cfg = &self.config;
        let mut rows =
            Vec::with_capacity(cfg.window_days as usize * TaxonomyRegistry::paid_campaign_count());

        for day in 0..cfg.window_days {
            let spend_date = cfg.anchor_date + Duration::days(day as i64);
            for channel in TaxonomyRegistry::paid_channels() {
                for campaign in TaxonomyRegistry::concrete_campaigns(*channel) {
                    let spend_usd =
                        round_cents(rng.uniform_f64(cfg.min_spend_usd, cfg.max_spend_usd));
                    let impressions =
                        rng.range_u64(cfg.min_impressions as u64, cfg.max_impressions as u64)
                            as u32;
                    rows.push(SpendRow {
                        spend_date,
                        channel: *channel,
                        campaign,
                        spend_usd,
                        impressions,
                    });
                }
            }
        }

        log::info!("spend ledger: {} rows over {} days", rows.len(), cfg.window_days);
        rows
    }
}
