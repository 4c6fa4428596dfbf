//! Dataset assembly — drives the generators and flattens their
//! output into the three fixture tables.
//!
//! GENERATION ORDER (fixed, documented, never reordered):
//!   1. users, in increasing index order, from the journey stream
//!   2. the spend ledger, from its own stream
//!
//! Users are generated sequentially so a run is reproducible from
//! the master seed alone.

use crate::{
    config::GeneratorConfig,
    error::FixtureResult,
    ids::IdMinter,
    journey::{JourneyGenerator, SyntheticUser},
    rng::{GeneratorSlot, RngBank},
    sink::{TableSink, TableView},
    spend::{SpendLedgerGenerator, SpendRow},
};

pub const EVENT_LOG_TABLE: &str = "raw_events";
pub const CONVERSIONS_TABLE: &str = "conversions";
pub const SPEND_TABLE: &str = "ad_spend";

pub const EVENT_LOG_HEADER: [&str; 8] = [
    "session_id",
    "user_id",
    "event_timestamp",
    "channel",
    "campaign",
    "device",
    "page_visited",
    "session_duration_seconds",
];

pub const CONVERSIONS_HEADER: [&str; 4] =
    ["user_id", "converted", "conversion_timestamp", "order_value"];

pub const SPEND_HEADER: [&str; 5] =
    ["spend_date", "channel", "campaign", "spend_usd", "impressions"];

const EVENT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SPEND_DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything one run generates, still in domain form.
pub struct Dataset {
    pub users: Vec<SyntheticUser>,
    pub spend: Vec<SpendRow>,
}

impl Dataset {
    /// The raw touchpoint event log: per-user touchpoint order,
    /// users in generation order.
    pub fn event_log_view(&self) -> TableView {
        let rows = self
            .users
            .iter()
            .flat_map(|user| &user.touchpoints)
            .map(|tp| {
                vec![
                    tp.session_id.clone(),
                    tp.user_id.clone(),
                    tp.event_timestamp.format(EVENT_TIMESTAMP_FORMAT).to_string(),
                    tp.channel.as_str().to_string(),
                    tp.campaign.unwrap_or_default().to_string(),
                    tp.device.to_string(),
                    tp.page_visited.to_string(),
                    tp.session_duration_seconds.to_string(),
                ]
            })
            .collect();
        TableView {
            name: EVENT_LOG_TABLE,
            header: &EVENT_LOG_HEADER,
            rows,
        }
    }

    /// One row per user, in generation order. Unconverted users get
    /// empty conversion fields, not a null marker.
    pub fn conversions_view(&self) -> TableView {
        let rows = self
            .users
            .iter()
            .map(|user| {
                vec![
                    user.user_id.clone(),
                    user.converted.to_string(),
                    user.conversion_timestamp
                        .map(|ts| ts.format(EVENT_TIMESTAMP_FORMAT).to_string())
                        .unwrap_or_default(),
                    user.order_value
                        .map(|v| format!("{v:.2}"))
                        .unwrap_or_default(),
                ]
            })
            .collect();
        TableView {
            name: CONVERSIONS_TABLE,
            header: &CONVERSIONS_HEADER,
            rows,
        }
    }

    pub fn spend_view(&self) -> TableView {
        let rows = self
            .spend
            .iter()
            .map(|row| {
                vec![
                    row.spend_date.format(SPEND_DATE_FORMAT).to_string(),
                    row.channel.as_str().to_string(),
                    row.campaign.to_string(),
                    format!("{:.2}", row.spend_usd),
                    row.impressions.to_string(),
                ]
            })
            .collect();
        TableView {
            name: SPEND_TABLE,
            header: &SPEND_HEADER,
            rows,
        }
    }
}

pub struct DatasetAssembler {
    config: GeneratorConfig,
}

impl DatasetAssembler {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate the full dataset from one RNG bank. Pure computation.
    pub fn assemble(&self, bank: &RngBank) -> Dataset {
        let mut salt_rng = bank.for_generator(GeneratorSlot::IdSalt);
        let mut ids = IdMinter::new(&mut salt_rng);

        let journeys = JourneyGenerator::new(self.config.clone());
        let mut journey_rng = bank.for_generator(GeneratorSlot::Journey);
        let users: Vec<SyntheticUser> = (0..self.config.user_count)
            .map(|index| journeys.generate_user(index, &mut journey_rng, &mut ids))
            .collect();
        log::info!(
            "journeys: generated {} users ({} converted)",
            users.len(),
            users.iter().filter(|u| u.converted).count()
        );

        let mut spend_rng = bank.for_generator(GeneratorSlot::SpendLedger);
        let spend = SpendLedgerGenerator::new(self.config.clone()).generate_ledger(&mut spend_rng);

        Dataset { users, spend }
    }

    /// Hand all three tables to the sink, event log first. Returns
    /// (table name, row count) pairs for the run summary.
    pub fn emit(
        &self,
        dataset: &Dataset,
        sink: &mut dyn TableSink,
    ) -> FixtureResult<Vec<(&'static str, usize)>> {
        let views = [
            dataset.event_log_view(),
            dataset.conversions_view(),
            dataset.spend_view(),
        ];
        let mut counts = Vec::with_capacity(views.len());
        for view in &views {
            sink.write_table(view)?;
            counts.push((view.name, view.row_count()));
        }
        Ok(counts)
    }
}
