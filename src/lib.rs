//! # methyltab
//!
//! `methyltab` tabulates the distribution of DNA methylation levels from a
//! whitespace-delimited sample table. The first line of the input names the
//! sample columns; each following line carries one methylation level (a
//! fraction, or `NA` for missing) per column. Columns are classified into
//! three fixed groups — an exact-match core set, `P`-prefixed samples and
//! `YJ`-prefixed samples — and every valid cell increments its group's
//! count at the rounded percentage. The result feeds a chart or table
//! renderer; this crate has no knowledge of how it is displayed.
//!
//! Malformed cells are tolerated by design: methylation exports are noisy,
//! so empty cells, `NA` sentinels and non-numeric garbage are silently
//! excluded from the counts instead of failing the analysis. The only hard
//! failures are empty input and a missing header line.
//!
//! ## Structure
//!
//! - [`data_structs`]: classification rules, column layout and the
//!   per-group frequency tables.
//! - [`tabulate`]: the single-pass tabulation engine.
//! - [`worker`]: off-thread execution with a single-shot reply channel.
//! - [`utils`]: cell-level helpers (missing-value sentinel, rounding).
//!
//! ## Usage
//!
//! ```
//! use methyltab::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let engine = TabulationEngine::new();
//!     let result = engine.tabulate("ddm1 P1 YJ1\n0.55 0.2 NA\n")?;
//!
//!     assert_eq!(result.table(SampleGroup::Core).count(55), 1);
//!     assert_eq!(result.table(SampleGroup::PSeries).count(20), 1);
//!     assert!(result.table(SampleGroup::YjSeries).is_empty());
//!     Ok(())
//! }
//! ```
//!
//! ### Running off the caller's thread
//!
//! ```
//! use methyltab::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let handle = spawn_tabulation(
//!         TabulationEngine::new(),
//!         "P1\n0.10\n0.10\n".to_string(),
//!     );
//!     let result = handle.wait()?;
//!     assert_eq!(result.table(SampleGroup::PSeries).count(10), 2);
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod prelude;
pub mod tabulate;
pub mod utils;
pub mod worker;
