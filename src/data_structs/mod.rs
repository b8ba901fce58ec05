//! Core data structures for methylation distribution tabulation.
//!
//! Key components of this module include:
//!
//! - [`GroupRules`]: the three column-classification predicates (exact
//!   core-set membership, `P` prefix, `YJ` prefix) evaluated in priority
//!   order.
//! - [`ColumnLayout`]: per-group header column indices, built once per
//!   analyzed file.
//! - [`FrequencyTable`]: a dynamic mapping from rounded methylation
//!   percentage to occurrence count.
//! - [`AnalysisResult`]: the three per-group frequency tables produced by
//!   one analysis.
//! - [`typedef`]: type aliases for percentage keys and counts.

mod freqs;
mod groups;
pub mod typedef;


pub use freqs::{
    AnalysisResult,
    FrequencyTable,
};
pub use groups::{
    ColumnLayout,
    GroupRules,
    SampleGroup,
    CORE_SAMPLES,
};
