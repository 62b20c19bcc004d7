/// File age analysis — bucket files by how recently they were modified.
///
/// Tier cut-offs are derived once from a single `now` so that every file in
/// a run is classified against the same instant, even when the scan itself
/// takes long enough to cross a boundary.
use crate::error::ConfigError;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const SECS_PER_DAY: u64 = 24 * 3600;

/// Largest accepted tier boundary, about a century.
pub const MAX_THRESHOLD_DAYS: u64 = 36_500;

/// How recently a file was modified, relative to the start of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeTier {
    LastMonth,
    LastSixMonths,
    LastYear,
    Older,
}

impl AgeTier {
    /// All tiers, newest first.
    pub const ALL: [AgeTier; 4] = [
        Self::LastMonth,
        Self::LastSixMonths,
        Self::LastYear,
        Self::Older,
    ];

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::LastMonth => "Last month",
            Self::LastSixMonths => "1-6 months ago",
            Self::LastYear => "6-12 months ago",
            Self::Older => "Over a year",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Tier boundaries in days. Must be strictly ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgeThresholds {
    pub last_month_days: u64,
    pub last_six_months_days: u64,
    pub last_year_days: u64,
}

impl Default for AgeThresholds {
    fn default() -> Self {
        Self {
            last_month_days: 30,
            last_six_months_days: 180,
            last_year_days: 365,
        }
    }
}

impl AgeThresholds {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let ordered = 0 < self.last_month_days
            && self.last_month_days < self.last_six_months_days
            && self.last_six_months_days < self.last_year_days;
        if !ordered {
            return Err(ConfigError::Invalid(format!(
                "age thresholds must be positive and strictly ascending, got {}/{}/{} days",
                self.last_month_days, self.last_six_months_days, self.last_year_days
            )));
        }
        if self.last_year_days > MAX_THRESHOLD_DAYS {
            return Err(ConfigError::Invalid(format!(
                "age thresholds must not exceed {MAX_THRESHOLD_DAYS} days, got {}",
                self.last_year_days
            )));
        }
        Ok(())
    }
}

/// Absolute cut-off instants computed from a fixed `now`.
#[derive(Debug, Clone, Copy)]
pub struct AgeCutoffs {
    month: SystemTime,
    six_months: SystemTime,
    year: SystemTime,
}

impl AgeCutoffs {
    pub fn new(now: SystemTime, thresholds: &AgeThresholds) -> Self {
        // Unvalidated thresholds may be huge; anything unrepresentable
        // clamps to the epoch.
        let back = |days: u64| {
            days.checked_mul(SECS_PER_DAY)
                .and_then(|secs| now.checked_sub(Duration::from_secs(secs)))
                .unwrap_or(UNIX_EPOCH)
        };
        Self {
            month: back(thresholds.last_month_days),
            six_months: back(thresholds.last_six_months_days),
            year: back(thresholds.last_year_days),
        }
    }

    /// Classify a modification time. Comparisons are exclusive: a file
    /// modified exactly on a boundary falls into the older tier. Timestamps
    /// in the future count as last month.
    pub fn classify(&self, modified: SystemTime) -> AgeTier {
        if modified > self.month {
            AgeTier::LastMonth
        } else if modified > self.six_months {
            AgeTier::LastSixMonths
        } else if modified > self.year {
            AgeTier::LastYear
        } else {
            AgeTier::Older
        }
    }
}

/// Count and size totals for a single age tier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBucket {
    pub count: u64,
    pub total_size: u64,
}

/// Per-tier totals. Every tier is always present, possibly with zero files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AgeBreakdown {
    buckets: [AgeBucket; 4],
}

impl AgeBreakdown {
    pub fn add(&mut self, tier: AgeTier, size: u64) {
        let bucket = &mut self.buckets[tier.index()];
        bucket.count += 1;
        bucket.total_size += size;
    }

    pub fn get(&self, tier: AgeTier) -> AgeBucket {
        self.buckets[tier.index()]
    }

    /// Number of files in `tier` or any newer tier.
    pub fn count_newer_than_or_in(&self, tier: AgeTier) -> u64 {
        AgeTier::ALL
            .iter()
            .take_while(|t| **t <= tier)
            .map(|t| self.get(*t).count)
            .sum()
    }

    pub fn total_count(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Tiers in newest-first order with their totals.
    pub fn iter(&self) -> impl Iterator<Item = (AgeTier, AgeBucket)> + '_ {
        AgeTier::ALL.iter().map(move |t| (*t, self.get(*t)))
    }
}

impl Serialize for AgeBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
