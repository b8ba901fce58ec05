use std::collections::BTreeMap;

use hashbrown::HashMap;
use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
    Serializer,
};

use super::groups::SampleGroup;
use super::typedef::{
    CountType,
    PercentType,
};

/// Serializes a HashMap in deterministic order.
fn serialize_sorted_map<S, K: Ord + Serialize, V: Serialize>(
    map: &HashMap<K, V>,
    serializer: S,
) -> anyhow::Result<S::Ok, S::Error>
where
    S: Serializer, {
    let sorted_map: BTreeMap<_, _> = map.iter().collect();
    sorted_map.serialize(serializer)
}

/// Maps rounded methylation percentage to occurrence count.
///
/// Keys are created on first observation; counts are never negative or
/// fractional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<PercentType, CountType>,
}

impl Serialize for FrequencyTable {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer, {
        serialize_sorted_map(&self.counts, serializer)
    }
}

impl<'de> Deserialize<'de> for FrequencyTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        Ok(Self {
            counts: HashMap::deserialize(deserializer)?,
        })
    }
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self { Self::default() }

    /// Adds one observation at the given percentage key.
    pub fn record(
        &mut self,
        percent: PercentType,
    ) {
        *self.counts.entry(percent).or_insert(0) += 1;
    }

    /// Occurrence count at a key, zero when the key was never observed.
    pub fn count(
        &self,
        percent: PercentType,
    ) -> CountType {
        self.counts.get(&percent).copied().unwrap_or(0)
    }

    /// Total number of observations across all keys.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&count| count as u64).sum()
    }

    /// Number of distinct percentage keys.
    pub fn len(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&PercentType, &CountType)> {
        self.counts.iter()
    }

    /// Entries in ascending key order, the order a chart renders them in.
    pub fn sorted_counts(&self) -> Vec<(PercentType, CountType)> {
        self.counts
            .iter()
            .map(|(&percent, &count)| (percent, count))
            .sorted_by_key(|&(percent, _)| percent)
            .collect()
    }

    pub fn counts(&self) -> &HashMap<PercentType, CountType> { &self.counts }
}

impl FromIterator<PercentType> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = PercentType>>(iter: T) -> Self {
        let mut table = Self::new();
        for percent in iter {
            table.record(percent);
        }
        table
    }
}

/// The three per-group frequency tables of one analysis.
///
/// Field names follow the wire shape consumed by the presentation layer.
/// The tables are independent; once returned the result is not mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "group1")]
    core: FrequencyTable,

    #[serde(rename = "pSamples")]
    p_series: FrequencyTable,

    #[serde(rename = "yjSamples")]
    yj_series: FrequencyTable,
}

impl AnalysisResult {
    pub fn new() -> Self { Self::default() }

    pub fn table(
        &self,
        group: SampleGroup,
    ) -> &FrequencyTable {
        match group {
            SampleGroup::Core => &self.core,
            SampleGroup::PSeries => &self.p_series,
            SampleGroup::YjSeries => &self.yj_series,
        }
    }

    pub(crate) fn table_mut(
        &mut self,
        group: SampleGroup,
    ) -> &mut FrequencyTable {
        match group {
            SampleGroup::Core => &mut self.core,
            SampleGroup::PSeries => &mut self.p_series,
            SampleGroup::YjSeries => &mut self.yj_series,
        }
    }

    /// Total observations across all three groups.
    pub fn total_observations(&self) -> u64 {
        SampleGroup::ALL
            .iter()
            .map(|&group| self.table(group).total())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        SampleGroup::ALL
            .iter()
            .all(|&group| self.table(group).is_empty())
    }
}
