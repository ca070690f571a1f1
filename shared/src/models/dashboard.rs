//! Dashboard Model
//!
//! The backend returns already aggregated metrics; the helpers here only
//! shape them for display.

use serde::{Deserialize, Serialize};

/// Reporting window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardPeriod {
    #[serde(rename = "7d")]
    Last7Days,
    #[default]
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "month")]
    ThisMonth,
    #[serde(rename = "all")]
    AllTime,
}

impl DashboardPeriod {
    pub const ALL: [DashboardPeriod; 4] = [
        Self::Last7Days,
        Self::Last30Days,
        Self::ThisMonth,
        Self::AllTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Last7Days => "7d",
            Self::Last30Days => "30d",
            Self::ThisMonth => "month",
            Self::AllTime => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::ThisMonth => "This month",
            Self::AllTime => "Since the beginning",
        }
    }
}

impl std::fmt::Display for DashboardPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DashboardPeriod {
    type Err = crate::error::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                crate::error::AppError::new(crate::error::ErrorCode::DashboardPeriodInvalid)
                    .with_detail("period", s)
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub average_watch_minutes: f64,
    pub completion_rate: f64,
    pub positive_reactions: i64,
    pub total_students: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementPoint {
    pub date: String,
    pub count: i64,
}

impl EngagementPoint {
    /// `dd/mm` for ISO dates; other strings are returned as-is
    pub fn day_label(&self) -> String {
        let day = self.date.get(..10).unwrap_or(&self.date);
        match chrono::NaiveDate::parse_from_str(day, "%Y-%m-%d") {
            Ok(date) => date.format("%d/%m").to_string(),
            Err(_) => self.date.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStudent {
    pub user_id: i64,
    pub name: String,
    pub completed_videos: i64,
    pub total_videos: i64,
    pub progress_percent: f64,
    pub completed_label: String,
}

impl TopStudent {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingDistribution {
    pub stars: u8,
    pub count: i64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRatings {
    pub average: f64,
    pub total_reviews: i64,
    #[serde(default)]
    pub distribution: Vec<RatingDistribution>,
}

/// `GET /dashboard?period=` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub period: DashboardPeriod,
    pub summary: DashboardSummary,
    #[serde(default)]
    pub engagement: Vec<EngagementPoint>,
    #[serde(default)]
    pub top_students: Vec<TopStudent>,
    #[serde(default)]
    pub ratings: Option<DashboardRatings>,
}

impl DashboardResponse {
    /// Rating rows to display; 5..1 stars with zero counts when absent
    pub fn rating_distribution(&self) -> Vec<RatingDistribution> {
        match &self.ratings {
            Some(r) if !r.distribution.is_empty() => r.distribution.clone(),
            _ => empty_rating_distribution(),
        }
    }

    pub fn engagement_bar_heights(&self) -> Vec<f64> {
        engagement_bar_heights(&self.engagement)
    }
}

pub fn empty_rating_distribution() -> Vec<RatingDistribution> {
    (1..=5u8)
        .rev()
        .map(|stars| RatingDistribution {
            stars,
            count: 0,
            percentage: 0.0,
        })
        .collect()
}

/// Minimum bar height in percent, so empty days stay visible
pub const MIN_BAR_HEIGHT: f64 = 2.0;

/// Bar heights in percent of the busiest point (the max is floored at 1)
pub fn engagement_bar_heights(points: &[EngagementPoint]) -> Vec<f64> {
    let max = points.iter().map(|p| p.count).max().unwrap_or(0).max(1) as f64;
    points
        .iter()
        .map(|p| (p.count as f64 / max * 100.0).max(MIN_BAR_HEIGHT))
        .collect()
}

/// Indexes of the points that get an x-axis label
///
/// Up to four points are all labelled; longer series get the first point,
/// the thirds and the last point.
pub fn x_axis_label_indexes(len: usize) -> Vec<usize> {
    if len <= 4 {
        return (0..len).collect();
    }
    let total = len - 1;
    vec![0, total / 3, total * 2 / 3, total]
}

/// Labels shown under the engagement chart
pub fn x_axis_labels(points: &[EngagementPoint]) -> Vec<String> {
    x_axis_label_indexes(points.len())
        .into_iter()
        .map(|idx| points[idx].day_label())
        .collect()
}

/// Up to two uppercase initials from the first words of a name
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(count: i64) -> EngagementPoint {
        EngagementPoint {
            date: "2026-01-01".into(),
            count,
        }
    }

    #[test]
    fn test_period_roundtrip() {
        for p in DashboardPeriod::ALL {
            let parsed: DashboardPeriod = p.as_str().parse().unwrap();
            assert_eq!(parsed, p);
        }
        let err = "year".parse::<DashboardPeriod>().unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::DashboardPeriodInvalid);
        assert_eq!(
            serde_json::to_string(&DashboardPeriod::Last7Days).unwrap(),
            "\"7d\""
        );
    }

    #[test]
    fn test_bar_heights() {
        let heights = engagement_bar_heights(&[point(0), point(5), point(10)]);
        assert_eq!(heights, vec![2.0, 50.0, 100.0]);

        // All-zero series: max floors at 1, every bar at the minimum
        let heights = engagement_bar_heights(&[point(0), point(0)]);
        assert_eq!(heights, vec![2.0, 2.0]);
        assert!(engagement_bar_heights(&[]).is_empty());
    }

    #[test]
    fn test_x_axis_label_indexes() {
        assert!(x_axis_label_indexes(0).is_empty());
        assert_eq!(x_axis_label_indexes(3), vec![0, 1, 2]);
        assert_eq!(x_axis_label_indexes(4), vec![0, 1, 2, 3]);
        assert_eq!(x_axis_label_indexes(7), vec![0, 2, 4, 6]);
        assert_eq!(x_axis_label_indexes(30), vec![0, 9, 19, 29]);
    }

    #[test]
    fn test_x_axis_labels() {
        let points: Vec<EngagementPoint> = (1..=6)
            .map(|d| EngagementPoint {
                date: format!("2026-03-0{d}"),
                count: d,
            })
            .collect();
        assert_eq!(
            x_axis_labels(&points),
            vec!["01/03", "02/03", "04/03", "06/03"]
        );

        let odd = EngagementPoint {
            date: "week 12".into(),
            count: 0,
        };
        assert_eq!(odd.day_label(), "week 12");
        let stamped = EngagementPoint {
            date: "2026-03-09T00:00:00Z".into(),
            count: 0,
        };
        assert_eq!(stamped.day_label(), "09/03");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("ana maria souza"), "AM");
        assert_eq!(initials("  joão "), "J");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_default_rating_distribution() {
        let json = r#"{"period":"all","summary":{"averageWatchMinutes":3.5,"completionRate":40,"positiveReactions":2,"totalStudents":9}}"#;
        let resp: DashboardResponse = serde_json::from_str(json).unwrap();
        let stars: Vec<u8> = resp.rating_distribution().iter().map(|r| r.stars).collect();
        assert_eq!(stars, vec![5, 4, 3, 2, 1]);
        assert!(resp.rating_distribution().iter().all(|r| r.count == 0));
        assert_eq!(resp.period, DashboardPeriod::AllTime);
    }
}
