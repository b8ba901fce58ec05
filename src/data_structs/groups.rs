use std::fmt::Display;

use hashbrown::HashSet;
use itertools::Itertools;
use once_cell::sync::Lazy;
use serde::{
    Deserialize,
    Serialize,
};

/// Sample names assigned to the core group by exact match.
pub static CORE_SAMPLES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from_iter(["ddm1", "ddmP-1", "Nip-1", "NIP"]));

const P_PREFIX: &str = "P";
const YJ_PREFIX: &str = "YJ";

/// One of the three fixed sample groups a column can belong to.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
pub enum SampleGroup {
    /// Core samples, matched by exact name.
    Core,
    /// Samples whose name starts with `P`.
    PSeries,
    /// Samples whose name starts with `YJ`.
    YjSeries,
}

impl SampleGroup {
    /// All groups in classification priority order.
    pub const ALL: [SampleGroup; 3] =
        [SampleGroup::Core, SampleGroup::PSeries, SampleGroup::YjSeries];
}

impl Display for SampleGroup {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            SampleGroup::Core => write!(f, "core"),
            SampleGroup::PSeries => write!(f, "P-series"),
            SampleGroup::YjSeries => write!(f, "YJ-series"),
        }
    }
}

/// Column classification rules.
///
/// Rules are evaluated in priority order: exact core-set membership first,
/// then the `P` prefix, then the `YJ` prefix. A column name matches at most
/// one group; names matching no rule are ignored entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRules {
    core_samples: HashSet<String>,
    p_prefix:     String,
    yj_prefix:    String,
}

impl Default for GroupRules {
    fn default() -> Self {
        Self {
            core_samples: CORE_SAMPLES.iter().map(|s| s.to_string()).collect(),
            p_prefix:     P_PREFIX.to_string(),
            yj_prefix:    YJ_PREFIX.to_string(),
        }
    }
}

impl GroupRules {
    pub fn with_core_samples<I, S>(
        mut self,
        samples: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>, {
        self.core_samples = samples.into_iter().map_into().collect();
        self
    }

    pub fn with_p_prefix(
        mut self,
        prefix: impl Into<String>,
    ) -> Self {
        self.p_prefix = prefix.into();
        self
    }

    pub fn with_yj_prefix(
        mut self,
        prefix: impl Into<String>,
    ) -> Self {
        self.yj_prefix = prefix.into();
        self
    }

    /// Classifies a column name. First matching rule wins.
    pub fn classify(
        &self,
        name: &str,
    ) -> Option<SampleGroup> {
        if self.core_samples.contains(name) {
            Some(SampleGroup::Core)
        }
        else if name.starts_with(&self.p_prefix) {
            Some(SampleGroup::PSeries)
        }
        else if name.starts_with(&self.yj_prefix) {
            Some(SampleGroup::YjSeries)
        }
        else {
            None
        }
    }
}

/// Per-group header column indices.
///
/// Built once from the header row and reused for every data row; a column's
/// group assignment never changes mid-file. The three index sets are
/// disjoint by rule priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    core:      Vec<usize>,
    p_series:  Vec<usize>,
    yj_series: Vec<usize>,
}

impl ColumnLayout {
    /// Classifies every header column by index.
    pub fn from_header<'a, I>(
        header: I,
        rules: &GroupRules,
    ) -> Self
    where
        I: IntoIterator<Item = &'a str>, {
        let mut layout = Self::default();
        for (index, name) in header.into_iter().enumerate() {
            match rules.classify(name) {
                Some(SampleGroup::Core) => layout.core.push(index),
                Some(SampleGroup::PSeries) => layout.p_series.push(index),
                Some(SampleGroup::YjSeries) => layout.yj_series.push(index),
                None => {},
            }
        }
        layout
    }

    pub fn indices(
        &self,
        group: SampleGroup,
    ) -> &[usize] {
        match group {
            SampleGroup::Core => &self.core,
            SampleGroup::PSeries => &self.p_series,
            SampleGroup::YjSeries => &self.yj_series,
        }
    }

    /// Total number of classified columns across all groups.
    pub fn classified(&self) -> usize {
        SampleGroup::ALL
            .iter()
            .map(|&group| self.indices(group).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool { self.classified() == 0 }
}
