//! Journey generation — one synthetic user per call.
//!
//! A journey is an ordered touchpoint sequence plus its conversion
//! outcome. Everything about a user is drawn from the journey RNG
//! stream in one fixed order, so a run is reproducible user by user.
//!
//! DRAW ORDER (fixed, documented, never reordered):
//!   1. touchpoint count
//!   2. conversion flag
//!   3. base day offset within the window
//!   4. device (constant for the whole user)
//!   5. per touchpoint: channel, campaign, hour, minute, page, duration
//!   6. order value (converted users only)

use crate::{
    config::GeneratorConfig,
    ids::IdMinter,
    rng::GeneratorRng,
    taxonomy::{CampaignSlot, Channel, TaxonomyRegistry},
    types::EntityId,
};
use chrono::{Duration, NaiveDateTime};

/// One recorded interaction between a user and a channel/campaign.
#[derive(Debug, Clone)]
pub struct Touchpoint {
    pub session_id: EntityId,
    pub user_id: EntityId,
    pub event_timestamp: NaiveDateTime,
    pub channel: Channel,
    pub campaign: CampaignSlot,
    pub device: &'static str,
    pub page_visited: &'static str,
    pub session_duration_seconds: u32,
}

/// A synthetic user: the journey plus its conversion outcome.
/// `conversion_timestamp` and `order_value` are present iff
/// `converted` is true.
#[derive(Debug, Clone)]
pub struct SyntheticUser {
    pub user_id: EntityId,
    pub touchpoints: Vec<Touchpoint>,
    pub converted: bool,
    pub conversion_timestamp: Option<NaiveDateTime>,
    pub order_value: Option<f64>,
}

pub struct JourneyGenerator {
    config: GeneratorConfig,
}

impl JourneyGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        assert!(
            config.min_touchpoints >= 1 && config.min_touchpoints <= config.max_touchpoints,
            "touchpoint bounds must satisfy 1 <= min <= max"
        );
        Self { config }
    }

    /// Generate user `index`. Pure computation: no I/O, no failure
    /// paths. Touchpoint `i` lands on base day + `i` days, so the
    /// journey is chronologically ordered by construction.
    pub fn generate_user(
        &self,
        index: usize,
        rng: &mut GeneratorRng,
        ids: &mut IdMinter,
    ) -> SyntheticUser {
        let cfg = &self.config;

        let count = rng.range_u64(cfg.min_touchpoints as u64, cfg.max_touchpoints as u64);
        let converted = rng.chance(cfg.conversion_rate);
        let base_offset = rng.next_u64_below(cfg.window_days as u64) as i64;
        let device = *rng.pick(TaxonomyRegistry::devices());

        let base_date = cfg.anchor_date + Duration::days(base_offset);
        let user_id = ids.user_id();

        let mut touchpoints = Vec::with_capacity(count as usize);
        for i in 0..count {
            let channel = *rng.pick(&Channel::ALL);
            let campaign = *rng.pick(TaxonomyRegistry::campaigns(channel));
            let hour = rng.range_u64(0, 23) as u32;
            let minute = rng.range_u64(0, 59) as u32;
            let event_timestamp = (base_date + Duration::days(i as i64))
                .and_hms_opt(hour, minute, 0)
                .unwrap();
            let page_visited = *rng.pick(TaxonomyRegistry::pages());
            let session_duration_seconds = rng.range_u64(
                cfg.min_session_seconds as u64,
                cfg.max_session_seconds as u64,
            ) as u32;

            touchpoints.push(Touchpoint {
                session_id: ids.session_id(),
                user_id: user_id.clone(),
                event_timestamp,
                channel,
                campaign,
                device,
                page_visited,
                session_duration_seconds,
            });
        }

        // A conversion is stamped at the last touchpoint; count >= 1
        // is asserted in new(), so last() always exists.
        let (conversion_timestamp, order_value) = if converted {
            let stamp = touchpoints.last().unwrap().event_timestamp;
            let value = round_cents(rng.uniform_f64(cfg.min_order_value, cfg.max_order_value));
            (Some(stamp), Some(value))
        } else {
            (None, None)
        };

        log::trace!(
            "user {index}: {count} touchpoints, converted={converted}, device={device}"
        );

        SyntheticUser {
            user_id,
            touchpoints,
            converted,
            conversion_timestamp,
            order_value,
        }
    }
}

/// Round a dollar amount to cent precision.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{GeneratorSlot, RngBank};

    fn generate_batch(seed: u64, n: usize) -> Vec<SyntheticUser> {
        let bank = RngBank::new(seed);
        let mut rng = bank.for_generator(GeneratorSlot::Journey);
        let mut salt_rng = bank.for_generator(GeneratorSlot::IdSalt);
        let mut ids = IdMinter::new(&mut salt_rng);
        let journeys = JourneyGenerator::new(GeneratorConfig::default_test());
        (0..n)
            .map(|i| journeys.generate_user(i, &mut rng, &mut ids))
            .collect()
    }

    #[test]
    fn touchpoint_count_stays_in_bounds() {
        for user in generate_batch(42, 500) {
            let n = user.touchpoints.len();
            assert!((1..=6).contains(&n), "user {} has {n} touchpoints", user.user_id);
        }
    }

    #[test]
    fn conversion_fields_present_iff_converted() {
        let users = generate_batch(42, 500);
        assert!(users.iter().any(|u| u.converted));
        assert!(users.iter().any(|u| !u.converted));
        for user in users {
            if user.converted {
                let last = user.touchpoints.last().unwrap().event_timestamp;
                assert_eq!(user.conversion_timestamp, Some(last));
                let value = user.order_value.unwrap();
                assert!((29.99..=499.99).contains(&value), "order value {value}");
                // Cent precision.
                assert!((value * 100.0 - (value * 100.0).round()).abs() < 1e-6);
            } else {
                assert_eq!(user.conversion_timestamp, None);
                assert_eq!(user.order_value, None);
            }
        }
    }

    #[test]
    fn campaign_always_belongs_to_its_channel() {
        for user in generate_batch(42, 500) {
            for tp in &user.touchpoints {
                assert!(
                    TaxonomyRegistry::campaigns(tp.channel).contains(&tp.campaign),
                    "campaign {:?} not allowed for channel {}",
                    tp.campaign,
                    tp.channel.as_str()
                );
            }
        }
    }

    #[test]
    fn device_is_constant_per_user() {
        for user in generate_batch(42, 500) {
            let devices: std::collections::HashSet<_> =
                user.touchpoints.iter().map(|tp| tp.device).collect();
            assert_eq!(devices.len(), 1);
        }
    }

    #[test]
    fn touchpoints_are_chronologically_ordered() {
        for user in generate_batch(42, 500) {
            for pair in user.touchpoints.windows(2) {
                assert!(pair[0].event_timestamp < pair[1].event_timestamp);
            }
        }
    }

    #[test]
    fn touchpoints_land_on_consecutive_days_from_base() {
        for user in generate_batch(42, 200) {
            let base = user.touchpoints[0].event_timestamp.date();
            for (i, tp) in user.touchpoints.iter().enumerate() {
                assert_eq!(tp.event_timestamp.date(), base + Duration::days(i as i64));
            }
        }
    }

    #[test]
    fn same_seed_generates_identical_users() {
        let a = generate_batch(42, 100);
        let b = generate_batch(42, 100);
        for (ua, ub) in a.iter().zip(&b) {
            assert_eq!(ua.user_id, ub.user_id);
            assert_eq!(ua.converted, ub.converted);
            assert_eq!(ua.order_value, ub.order_value);
            assert_eq!(ua.touchpoints.len(), ub.touchpoints.len());
            for (ta, tb) in ua.touchpoints.iter().zip(&ub.touchpoints) {
                assert_eq!(ta.session_id, tb.session_id);
                assert_eq!(ta.event_timestamp, tb.event_timestamp);
                assert_eq!(ta.channel, tb.channel);
                assert_eq!(ta.campaign, tb.campaign);
            }
        }
    }

    #[test]
    fn base_dates_stay_inside_the_window() {
        let cfg = GeneratorConfig::default_test();
        for user in generate_batch(42, 500) {
            let base = user.touchpoints[0].event_timestamp.date();
            let offset = (base - cfg.anchor_date).num_days();
            assert!((0..cfg.window_days as i64).contains(&offset));
        }
    }

    #[test]
    fn round_cents_rounds_to_two_decimals() {
        assert_eq!(round_cents(29.991), 29.99);
        assert_eq!(round_cents(123.456), 123.46);
        assert_eq!(round_cents(499.989), 499.99);
    }
}
