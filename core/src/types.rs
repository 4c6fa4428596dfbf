//! Shared primitive types used across the generation engine.

/// A stable, opaque identifier for any generated entity.
pub type EntityId = String;

/// Offset in whole days from the anchor date of the generation window.
pub type DayOffset = u32;
