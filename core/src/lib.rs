//! funnel-core — deterministic synthetic marketing-funnel fixtures.
//!
//! Generates three mutually consistent tables for multi-touch
//! attribution testing: a raw touchpoint event log, a per-user
//! conversion table, and a daily advertising-spend ledger. All
//! randomness flows through one seeded RNG bank, so a fixed seed
//! reproduces the dataset byte for byte.

pub mod assembler;
pub mod config;
pub mod error;
pub mod ids;
pub mod journey;
pub mod rng;
pub mod sink;
pub mod spend;
pub mod taxonomy;
pub mod types;
