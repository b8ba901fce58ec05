//! Single-pass tabulation of a whitespace-delimited methylation table.
//!
//! Line 0 of the input is the header; every following non-blank line is a
//! data row aligned positionally to it. The header is classified once into
//! a [`ColumnLayout`], then every row updates the per-group frequency
//! tables. Malformed cells never abort the analysis: empty cells, the `NA`
//! sentinel, non-numeric text and non-finite parses are all skipped
//! silently. The only hard failures are empty input and a missing or empty
//! header line.

use std::error::Error;
use std::fmt::{
    Display,
    Formatter,
};

use log::{
    debug,
    trace,
};

use crate::data_structs::{
    AnalysisResult,
    ColumnLayout,
    GroupRules,
    SampleGroup,
};
use crate::utils::{
    is_missing,
    round_percent,
};

/// Structural failures that abort an analysis.
#[derive(Debug, PartialEq, Eq)]
pub enum TabulateError {
    /// The input text is empty or all-whitespace.
    EmptyInput,
    /// The first line is absent or contains no column names.
    MissingHeader,
}

impl Display for TabulateError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            TabulateError::EmptyInput => {
                write!(f, "File is empty")
            },
            TabulateError::MissingHeader => {
                write!(f, "Missing header line")
            },
        }
    }
}

impl Error for TabulateError {}

/// Classifies header columns and tallies rounded methylation percentages.
///
/// One invocation owns its state exclusively; analyzing several files
/// concurrently needs nothing more than independent engine values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabulationEngine {
    rules: GroupRules,
}

impl TabulationEngine {
    pub fn new() -> Self { Self::default() }

    pub fn with_rules(
        mut self,
        rules: GroupRules,
    ) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &GroupRules { &self.rules }

    /// Runs the full analysis over the raw text of one table.
    ///
    /// Fails with [`TabulateError`] when there is no readable content or no
    /// header line; every per-cell problem is tolerated and excluded from
    /// the counts instead.
    pub fn tabulate(
        &self,
        raw_text: &str,
    ) -> anyhow::Result<AnalysisResult> {
        if raw_text.trim().is_empty() {
            return Err(TabulateError::EmptyInput.into());
        }

        let mut lines = raw_text.split('\n');
        let header_line = lines.next().map(str::trim).unwrap_or_default();
        if header_line.is_empty() {
            return Err(TabulateError::MissingHeader.into());
        }

        let layout = ColumnLayout::from_header(
            header_line.split_whitespace(),
            &self.rules,
        );
        debug!(
            "Classified {} of {} header columns",
            layout.classified(),
            header_line.split_whitespace().count()
        );

        let mut result = AnalysisResult::new();
        let mut cells: Vec<&str> = Vec::new();

        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            cells.clear();
            cells.extend(line.split_whitespace());

            for group in SampleGroup::ALL {
                let table = result.table_mut(group);
                for &index in layout.indices(group) {
                    // Rows shorter than the header contribute nothing for
                    // the missing trailing columns.
                    let Some(&cell) = cells.get(index) else {
                        continue;
                    };
                    if is_missing(cell) {
                        continue;
                    }
                    match cell.parse::<f64>() {
                        Ok(value) if value.is_finite() => {
                            table.record(round_percent(value));
                        },
                        // Non-numeric and non-finite cells are tolerated.
                        _ => {
                            trace!("Skipped unparseable cell '{}'", cell)
                        },
                    }
                }
            }
        }

        debug!(
            "Tabulated {} observations across {} groups",
            result.total_observations(),
            SampleGroup::ALL.len()
        );
        Ok(result)
    }
}
