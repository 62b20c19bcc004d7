/// Recommendation tiers — canned advice keyed on the supported file count.
///
/// Tiers are evaluated top-down with strict `<` comparisons and the first
/// match wins:
///
/// | supported files      | tier               |
/// |----------------------|--------------------|
/// | 0                    | `NoSupportedFiles` |
/// | < `manageable_below` | `Manageable`       |
/// | < `moderate_below`   | `Moderate`         |
/// | < `attention_below`  | `Attention`        |
/// | otherwise            | `TooMany`          |
use super::EstimateResult;
use crate::analysis::age::AgeTier;
use crate::analysis::stats::AggregateStats;
use crate::config::AnalyzerConfig;
use crate::error::ConfigError;
use crate::model::size::format_minutes;
use serde::{Deserialize, Serialize};

/// Tier boundaries and the cost multipliers quoted in the advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendConfig {
    pub manageable_below: u64,
    pub moderate_below: u64,
    pub attention_below: u64,
    /// Cost multiplier quoted for the manageable and attention tiers.
    pub quote_multiplier: f64,
    /// Cost multiplier quoted when everything is indexed in the cloud.
    pub bulk_quote_multiplier: f64,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            manageable_below: 100,
            moderate_below: 500,
            attention_below: 1_500,
            quote_multiplier: 1.2,
            bulk_quote_multiplier: 1.3,
        }
    }
}

impl RecommendConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let ordered = 0 < self.manageable_below
            && self.manageable_below < self.moderate_below
            && self.moderate_below < self.attention_below;
        if !ordered {
            return Err(ConfigError::Invalid(format!(
                "recommendation thresholds must be positive and strictly ascending, got {}/{}/{}",
                self.manageable_below, self.moderate_below, self.attention_below
            )));
        }
        if self.quote_multiplier <= 0.0 || self.bulk_quote_multiplier <= 0.0 {
            return Err(ConfigError::Invalid(
                "quote multipliers must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Which advice applies to a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    NoSupportedFiles,
    Manageable,
    Moderate,
    Attention,
    TooMany,
}

impl RecommendationTier {
    /// Select the tier for `supported_files`.
    pub fn for_count(supported_files: u64, config: &RecommendConfig) -> Self {
        if supported_files == 0 {
            Self::NoSupportedFiles
        } else if supported_files < config.manageable_below {
            Self::Manageable
        } else if supported_files < config.moderate_below {
            Self::Moderate
        } else if supported_files < config.attention_below {
            Self::Attention
        } else {
            Self::TooMany
        }
    }

    /// True for tiers that should be rendered as a warning.
    pub fn is_warning(self) -> bool {
        matches!(self, Self::NoSupportedFiles | Self::Attention | Self::TooMany)
    }
}

/// Advice for one folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub tier: RecommendationTier,
    pub headline: String,
    /// Advice lines in display order. Empty strings are paragraph breaks.
    pub lines: Vec<String>,
}

/// Build the advice for a folder from its statistics and estimates.
pub fn recommend(
    stats: &AggregateStats,
    estimates: &EstimateResult,
    config: &AnalyzerConfig,
) -> Recommendation {
    let rc = &config.recommend;
    let n = stats.supported_files;
    let tier = RecommendationTier::for_count(n, rc);

    let local = &estimates.local;
    let cloud = &estimates.cloud;
    let local_profile = &config.estimate.local;
    let money = |amount: f64| format!("{}{amount:.2}", estimates.currency);
    // Advice quotes whole minutes, truncated.
    let whole = |minutes: f64| minutes as u64;

    let (headline, lines) = match tier {
        RecommendationTier::NoSupportedFiles => (
            "NO SUPPORTED FILES FOUND!".to_string(),
            vec![format!(
                "Add {} files to the folder.",
                config.supported_extensions.label()
            )],
        ),
        RecommendationTier::Manageable => (
            "GREAT! A manageable number of files".to_string(),
            vec![
                format!("With {n} files, indexing will be quick."),
                format!(
                    "→ Use {} (free): ~{} minutes",
                    local.name,
                    whole(local.minutes)
                ),
                format!(
                    "→ Or {} (fast): ~{} minutes, ~{}",
                    cloud.name,
                    whole(cloud.minutes),
                    money(cloud.quote(rc.quote_multiplier))
                ),
            ],
        ),
        RecommendationTier::Moderate => (
            "GOOD! A medium number of files".to_string(),
            vec![
                format!("With {n} files, indexing will take a while."),
                format!("→ Recommendation: use {} (free) and let it run", local.name),
                format!("→ Estimated time: ~{} minutes", whole(local.minutes)),
                format!(
                    "→ Alternative: {} if you are in a hurry (~{} min)",
                    cloud.name,
                    whole(cloud.minutes)
                ),
            ],
        ),
        RecommendationTier::Attention => {
            let recent = stats.by_age.count_newer_than_or_in(AgeTier::LastMonth);
            let half_year = stats.by_age.count_newer_than_or_in(AgeTier::LastSixMonths);
            (
                "ATTENTION! Many files to process".to_string(),
                vec![
                    format!("With {n} files, indexing will take time."),
                    String::new(),
                    "OPTIONS:".to_string(),
                    "1. FILTER BY AGE: index only recent files".to_string(),
                    format!(
                        "   - Last month: {recent} files → ~{} min with {}",
                        whole(local_profile.minutes_for_files(recent)),
                        local.name
                    ),
                    format!(
                        "   - Last 6 months: {half_year} files → ~{} min",
                        whole(local_profile.minutes_for_files(half_year))
                    ),
                    String::new(),
                    format!(
                        "2. USE {}: faster, but costs ~{}",
                        cloud.name.to_uppercase(),
                        money(cloud.quote(rc.quote_multiplier))
                    ),
                    String::new(),
                    "3. INDEX EVERYTHING: run it overnight or over the weekend".to_string(),
                    format!(
                        "   → Time: ~{} minutes ({})",
                        whole(local.minutes),
                        format_minutes(local.minutes)
                    ),
                ],
            )
        }
        RecommendationTier::TooMany => {
            let last_year = stats.by_age.count_newer_than_or_in(AgeTier::LastYear);
            (
                "TOO MANY FILES! Filtering is strongly recommended".to_string(),
                vec![
                    format!("With {n} files, processing will be VERY long."),
                    String::new(),
                    "SUGGESTED STRATEGIES:".to_string(),
                    String::new(),
                    "1. FILTER BY TYPE: drop formats you do not need".to_string(),
                    "2. FILTER BY AGE: recent files only (last year)".to_string(),
                    format!(
                        "   → Files from the last year: {last_year} → ~{} min",
                        whole(local_profile.minutes_for_files(last_year))
                    ),
                    String::new(),
                    "3. FILTER BY FOLDER: only the documents that matter".to_string(),
                    String::new(),
                    "4. IF YOU REALLY WANT EVERYTHING:".to_string(),
                    format!(
                        "   - Use {}: ~{} min (~{})",
                        cloud.name,
                        whole(cloud.minutes),
                        money(cloud.quote(rc.bulk_quote_multiplier))
                    ),
                    format!(
                        "   - Or {}: ~{} min (free but long)",
                        local.name,
                        whole(local.minutes)
                    ),
                ],
            )
        }
    };

    Recommendation {
        tier,
        headline,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::estimate;

    fn tier(n: u64) -> RecommendationTier {
        RecommendationTier::for_count(n, &RecommendConfig::default())
    }

    // ── tier selection ───────────────────────────────────────────────────

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(tier(0), RecommendationTier::NoSupportedFiles);
        assert_eq!(tier(1), RecommendationTier::Manageable);
        assert_eq!(tier(99), RecommendationTier::Manageable);
        assert_eq!(tier(100), RecommendationTier::Moderate);
        assert_eq!(tier(499), RecommendationTier::Moderate);
        assert_eq!(tier(500), RecommendationTier::Attention);
        assert_eq!(tier(1_499), RecommendationTier::Attention);
        assert_eq!(tier(1_500), RecommendationTier::TooMany);
        assert_eq!(tier(u64::MAX), RecommendationTier::TooMany);
    }

    #[test]
    fn custom_thresholds_shift_tiers() {
        let config = RecommendConfig {
            manageable_below: 10,
            moderate_below: 20,
            attention_below: 30,
            ..RecommendConfig::default()
        };
        assert_eq!(
            RecommendationTier::for_count(10, &config),
            RecommendationTier::Moderate
        );
        assert_eq!(
            RecommendationTier::for_count(30, &config),
            RecommendationTier::TooMany
        );
    }

    // ── advice text ──────────────────────────────────────────────────────

    fn stats_with(supported: u64, size: u64) -> AggregateStats {
        AggregateStats {
            total_files: supported,
            total_size: size,
            supported_files: supported,
            supported_size: size,
            ..AggregateStats::default()
        }
    }

    fn advise(stats: &AggregateStats) -> Recommendation {
        let config = AnalyzerConfig::default();
        let est = estimate(stats.supported_files, stats.supported_size, &config.estimate);
        recommend(stats, &est, &config)
    }

    #[test]
    fn empty_folder_asks_for_documents() {
        let rec = advise(&stats_with(0, 0));
        assert_eq!(rec.tier, RecommendationTier::NoSupportedFiles);
        assert!(rec.tier.is_warning());
        assert_eq!(rec.lines.len(), 1);
        assert!(rec.lines[0].contains("DOC/DOCX/PDF/TXT"));
    }

    /// 50 one-MiB files: ~7 minutes locally, cloud quote 0.025 × 1.2.
    #[test]
    fn manageable_quotes_both_backends() {
        let rec = advise(&stats_with(50, 50 * 1024 * 1024));
        assert_eq!(rec.tier, RecommendationTier::Manageable);
        assert!(!rec.tier.is_warning());
        assert!(rec.lines[1].contains("Ollama"));
        assert!(rec.lines[1].contains("~7 minutes"), "{:?}", rec.lines);
        assert!(rec.lines[2].contains("$0.03"), "{:?}", rec.lines);
    }

    #[test]
    fn moderate_recommends_local() {
        let rec = advise(&stats_with(340, 0));
        assert_eq!(rec.tier, RecommendationTier::Moderate);
        assert!(rec.lines.iter().any(|l| l.contains("~20 minutes")));
    }

    /// The age filter options count files by tier, cumulatively.
    #[test]
    fn attention_uses_age_sub_counts() {
        let mut stats = stats_with(1_000, 0);
        for _ in 0..34 {
            stats.by_age.add(AgeTier::LastMonth, 0);
        }
        for _ in 0..17 {
            stats.by_age.add(AgeTier::LastSixMonths, 0);
        }
        let rec = advise(&stats);

        assert_eq!(rec.tier, RecommendationTier::Attention);
        assert!(
            rec.lines.iter().any(|l| l.contains("Last month: 34 files → ~2 min")),
            "{:?}",
            rec.lines
        );
        assert!(
            rec.lines.iter().any(|l| l.contains("Last 6 months: 51 files → ~3 min")),
            "{:?}",
            rec.lines
        );
        assert!(rec.lines.iter().any(|l| l.contains("USE OPENAI")));
    }

    #[test]
    fn too_many_uses_last_year_count_and_bulk_quote() {
        let mut stats = stats_with(2_000, 0);
        for age in [AgeTier::LastMonth, AgeTier::LastSixMonths, AgeTier::LastYear] {
            for _ in 0..17 {
                stats.by_age.add(age, 0);
            }
        }
        stats.by_age.add(AgeTier::Older, 0);
        let rec = advise(&stats);

        assert_eq!(rec.tier, RecommendationTier::TooMany);
        assert!(
            rec.lines
                .iter()
                .any(|l| l.contains("Files from the last year: 51 → ~3 min")),
            "{:?}",
            rec.lines
        );
        // 2000 × 5000 / 1000 × 0.0001 = 1.00, quoted × 1.3.
        assert!(rec.lines.iter().any(|l| l.contains("$1.30")), "{:?}", rec.lines);
    }

    #[test]
    fn thresholds_must_ascend() {
        let bad = RecommendConfig {
            moderate_below: 50,
            ..RecommendConfig::default()
        };
        assert!(bad.validate().is_err());
        assert!(RecommendConfig::default().validate().is_ok());
    }
}
