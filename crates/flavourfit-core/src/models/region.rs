// ABOUTME: State codes, broad geographic regions, and per-state recipe counts
// ABOUTME: Static state-to-region lookup with an explicit fallback region
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Two-letter state code (`MH`, `KA`, ...), stored upper-case
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct StateCode(String);

impl StateCode {
    /// Normalize a raw code (trimmed, upper-cased)
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_uppercase())
    }

    /// Borrow the code
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code is empty after normalization
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for StateCode {
    fn from(code: String) -> Self {
        Self::new(&code)
    }
}

impl From<&str> for StateCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<StateCode> for String {
    fn from(code: StateCode) -> Self {
        code.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Coarse geographic grouping that state codes roll up into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BroadRegion {
    /// Northern states
    North,
    /// Southern states
    South,
    /// Eastern states
    East,
    /// Western states
    West,
}

impl BroadRegion {
    /// Parse a region name case-insensitively
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "north" => Some(Self::North),
            "south" => Some(Self::South),
            "east" => Some(Self::East),
            "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }
}

impl fmt::Display for BroadRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad region assumed for state codes missing from the lookup table.
///
/// Unmapped codes (north-eastern and central states, typos) roll up to North.
pub const DEFAULT_BROAD_REGION: BroadRegion = BroadRegion::North;

/// State code to broad region lookup
const STATE_REGIONS: &[(&str, BroadRegion)] = &[
    ("DL", BroadRegion::North),
    ("PB", BroadRegion::North),
    ("HR", BroadRegion::North),
    ("UP", BroadRegion::North),
    ("RJ", BroadRegion::North),
    ("MH", BroadRegion::West),
    ("GJ", BroadRegion::West),
    ("GA", BroadRegion::West),
    ("TN", BroadRegion::South),
    ("KA", BroadRegion::South),
    ("KL", BroadRegion::South),
    ("AP", BroadRegion::South),
    ("TS", BroadRegion::South),
    ("WB", BroadRegion::East),
    ("OR", BroadRegion::East),
    ("BR", BroadRegion::East),
    ("JH", BroadRegion::East),
];

/// Broad region a state code rolls up into, or [`DEFAULT_BROAD_REGION`]
#[must_use]
pub fn broad_region_for(code: &StateCode) -> BroadRegion {
    STATE_REGIONS
        .iter()
        .find(|(state, _)| *state == code.as_str())
        .map_or(DEFAULT_BROAD_REGION, |(_, region)| *region)
}

/// Number of recipes per state, as fed to the heatmap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCounts {
    counts: BTreeMap<StateCode, u32>,
}

impl RegionCounts {
    /// Create an empty set of counts
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` recipes to a state
    pub fn add(&mut self, code: StateCode, n: u32) {
        *self.counts.entry(code).or_insert(0) += n;
    }

    /// Count for a state (zero when absent)
    #[must_use]
    pub fn get(&self, code: &StateCode) -> u32 {
        self.counts.get(code).copied().unwrap_or(0)
    }

    /// Largest count over all states, never below 1
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0).max(1)
    }

    /// Iterate states in code order
    pub fn iter(&self) -> impl Iterator<Item = (&StateCode, u32)> {
        self.counts.iter().map(|(code, count)| (code, *count))
    }

    /// Number of states with an entry
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no state has an entry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(StateCode, u32)> for RegionCounts {
    fn from_iter<I: IntoIterator<Item = (StateCode, u32)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (code, n) in iter {
            counts.add(code, n);
        }
        counts
    }
}
