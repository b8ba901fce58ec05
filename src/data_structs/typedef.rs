//! Type aliases shared across the crate.

/// Rounded methylation percentage used as a frequency key.
///
/// Keys are open-ended: inputs above 1.0 are legal and produce keys above
/// 100, so no fixed-size range can be assumed.
pub type PercentType = i64;

/// Occurrence count for a single percentage key.
pub type CountType = u32;
