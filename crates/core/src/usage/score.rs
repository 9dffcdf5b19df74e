//! Local heuristic score, computed without the completion service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::UsageRecord;
use super::category::{category_for_domain, domain_matches, normalize_domain};

/// Domains that always count as productive, whatever their category.
pub const PRODUCTIVE_DOMAINS: &[&str] = &[
    "github.com",
    "stackoverflow.com",
    "colab.research.google.com",
    "coursera.org",
    "edx.org",
    "udemy.com",
    "nptel.ac.in",
];

/// Body of `POST /score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ScoreReport {
    /// 0..=100
    pub score: u8,
    pub total_minutes: f64,
    /// Minutes per category name, sorted by name.
    pub categories: BTreeMap<String, f64>,
}

impl ScoreReport {
    #[must_use]
    pub fn from_records(records: &[UsageRecord]) -> Self {
        let total: f64 = records.iter().map(UsageRecord::minutes).sum();
        Self {
            score: productivity_score(records),
            total_minutes: round2(total),
            categories: category_minutes(records),
        }
    }
}

fn is_productive(domain: &str) -> bool {
    let normalized = normalize_domain(domain);
    PRODUCTIVE_DOMAINS.iter().any(|target| domain_matches(&normalized, target))
        || category_for_domain(&normalized).is_productive()
}

/// Share of time spent on productive sites, as a whole percentage.
///
/// Zero when there is no usage or all times are zero.
#[must_use]
pub fn productivity_score(records: &[UsageRecord]) -> u8 {
    let total: f64 = records.iter().map(UsageRecord::minutes).sum();
    if total <= 0.0 {
        return 0;
    }
    let productive: f64 =
        records.iter().filter(|r| is_productive(&r.domain)).map(UsageRecord::minutes).sum();
    let percent = (productive / total * 100.0).round().clamp(0.0, 100.0);
    percent as u8
}

/// Minutes summed per category.
#[must_use]
pub fn category_minutes(records: &[UsageRecord]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for record in records {
        let category = category_for_domain(&record.domain);
        *totals.entry(category.as_str().to_owned()).or_insert(0.0) += record.minutes();
    }
    for minutes in totals.values_mut() {
        *minutes = round2(*minutes);
    }
    totals
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    #[test]
    fn test_score_empty_is_zero() {
        assert_eq!(productivity_score(&[]), 0);
    }

    #[test]
    fn test_score_zero_time_is_zero() {
        assert_eq!(productivity_score(&[UsageRecord::new("github.com", 0)]), 0);
    }

    #[test]
    fn test_score_mixed_usage() {
        let records = vec![
            UsageRecord::new("github.com", 30),
            UsageRecord::new("youtube.com", 60),
            UsageRecord::new("coursera.org", 10),
        ];
        assert_eq!(productivity_score(&records), 40);
    }

    #[test]
    fn test_explicit_productive_domain_outside_categories() {
        let records =
            vec![UsageRecord::new("stackoverflow.com", 1), UsageRecord::new("reddit.com", 2)];
        assert_eq!(productivity_score(&records), 33);
    }

    #[test]
    fn test_score_all_productive_caps_at_100() {
        let records = vec![
            UsageRecord::new("colab.research.google.com", 5),
            UsageRecord::new("www.gitlab.com", 5),
        ];
        assert_eq!(productivity_score(&records), 100);
    }

    #[test]
    fn test_category_minutes_sums_and_sorts() {
        let records = vec![
            UsageRecord::new("youtube.com", 20),
            UsageRecord::new("github.com", Number::from_f64(12.5).unwrap()),
            UsageRecord::new("netflix.com", 10),
        ];
        let totals = category_minutes(&records);
        let keys: Vec<_> = totals.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Coding", "Entertainment"]);
        assert_eq!(totals["Entertainment"], 30.0);
        assert_eq!(totals["Coding"], 12.5);
    }

    #[test]
    fn test_report_from_records() {
        let records = vec![UsageRecord::new("github.com", 45), UsageRecord::new("x.com", 15)];
        let report = ScoreReport::from_records(&records);
        assert_eq!(report.score, 75);
        assert_eq!(report.total_minutes, 60.0);
        assert_eq!(report.categories.len(), 2);
    }
}
