//! Static channel/campaign taxonomy shared by every generator.
//!
//! Pure read-only reference data: the channel set, the allowed
//! campaigns per channel, device types, page identifiers, and the
//! paid-channel subset the spend ledger iterates. No side effects.
//!
//! "No campaign" is a type-level sentinel: campaign slots are
//! `Option<&'static str>` and `None` means the touchpoint carries no
//! campaign. The spend ledger never emits sentinel rows.

use serde::{Deserialize, Serialize};

/// A high-level acquisition source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    PaidSearch,
    OrganicSearch,
    Email,
    SocialMedia,
    Direct,
    Referral,
    PaidSocial,
}

impl Channel {
    /// Every channel, in the canonical draw order.
    pub const ALL: [Channel; 7] = [
        Channel::PaidSearch,
        Channel::OrganicSearch,
        Channel::Email,
        Channel::SocialMedia,
        Channel::Direct,
        Channel::Referral,
        Channel::PaidSocial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::PaidSearch => "paid_search",
            Channel::OrganicSearch => "organic_search",
            Channel::Email => "email",
            Channel::SocialMedia => "social_media",
            Channel::Direct => "direct",
            Channel::Referral => "referral",
            Channel::PaidSocial => "paid_social",
        }
    }
}

/// A campaign slot: a concrete campaign name, or the "no campaign"
/// sentinel.
pub type CampaignSlot = Option<&'static str>;

/// Read-only lookup over the fixed marketing taxonomy.
pub struct TaxonomyRegistry;

impl TaxonomyRegistry {
    /// The allowed campaign slots for a channel, sentinel included.
    /// Every list is non-empty; a touchpoint's campaign is always
    /// drawn from its own channel's list, never another channel's.
    pub fn campaigns(channel: Channel) -> &'static [CampaignSlot] {
        match channel {
            Channel::PaidSearch => &[
                Some("spring_sale_2024"),
                Some("brand_awareness_q1"),
                Some("retargeting_jan"),
            ],
            Channel::OrganicSearch => &[Some("seo_blog_push"), Some("content_hub_v2"), None],
            Channel::Email => &[
                Some("welcome_series"),
                Some("abandoned_cart"),
                Some("loyalty_nudge"),
            ],
            Channel::SocialMedia => &[
                Some("instagram_launch"),
                Some("tiktok_awareness"),
                Some("fb_engagement"),
            ],
            Channel::Direct => &[None],
            Channel::Referral => &[Some("partner_promo_jan"), Some("affiliate_v2"), None],
            Channel::PaidSocial => &[
                Some("meta_lookalike"),
                Some("linkedin_b2b"),
                Some("youtube_retarget"),
            ],
        }
    }

    /// The channel's concrete campaigns, sentinel filtered out, in
    /// declaration order.
    pub fn concrete_campaigns(channel: Channel) -> impl Iterator<Item = &'static str> {
        Self::campaigns(channel).iter().filter_map(|slot| *slot)
    }

    /// Device types. A user keeps one device across all touchpoints.
    pub fn devices() -> &'static [&'static str] {
        &["mobile", "desktop", "tablet"]
    }

    /// Page identifiers a touchpoint can land on.
    pub fn pages() -> &'static [&'static str] {
        &[
            "/home", "/products", "/pricing", "/about", "/blog", "/signup", "/checkout",
        ]
    }

    /// Channels the spend ledger treats as paid, in ledger emission
    /// order. social_media and email are not nominally "paid" but the
    /// upstream dataset ledgers them; kept as-is for compatibility.
    pub fn paid_channels() -> &'static [Channel] {
        &[
            Channel::PaidSearch,
            Channel::PaidSocial,
            Channel::SocialMedia,
            Channel::Email,
        ]
    }

    /// Total concrete campaigns across the paid subset. One ledger
    /// row per day per entry.
    pub fn paid_campaign_count() -> usize {
        Self::paid_channels()
            .iter()
            .map(|c| Self::concrete_campaigns(*c).count())
            .sum()
    }
}
