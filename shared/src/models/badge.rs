//! Badge Model

use serde::{Deserialize, Serialize};

/// Fixed badge color palette
pub const BADGE_COLORS: [&str; 8] = [
    "#8E2DE2", // primary purple
    "#4A00E0", // secondary purple
    "#FFD700", // yellow
    "#3B82F6", // blue
    "#10B981", // green
    "#EF4444", // red
    "#A855F7", // purple
    "#F97316", // orange
];

/// Achievement kind that a badge tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeType {
    VideosCompleted,
    CoursesCompleted,
    HoursWatched,
    CommentsMade,
    RatingsGiven,
    CommunityPosts,
}

impl BadgeType {
    pub const ALL: [BadgeType; 6] = [
        Self::VideosCompleted,
        Self::CoursesCompleted,
        Self::HoursWatched,
        Self::CommentsMade,
        Self::RatingsGiven,
        Self::CommunityPosts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VideosCompleted => "videos_completed",
            Self::CoursesCompleted => "courses_completed",
            Self::HoursWatched => "hours_watched",
            Self::CommentsMade => "comments_made",
            Self::RatingsGiven => "ratings_given",
            Self::CommunityPosts => "community_posts",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::VideosCompleted => "Videos completed",
            Self::CoursesCompleted => "Courses completed",
            Self::HoursWatched => "Hours watched",
            Self::CommentsMade => "Comments made",
            Self::RatingsGiven => "Ratings given",
            Self::CommunityPosts => "Community posts",
        }
    }
}

/// Badge entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: i64,
    #[serde(default)]
    pub platform_id: Option<i64>,
    #[serde(rename = "type")]
    pub badge_type: BadgeType,
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub color: String,
    pub threshold: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Create / update badge payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeForm {
    pub title: String,
    #[serde(rename = "type")]
    pub badge_type: BadgeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub color: String,
    pub threshold: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_type_wire_names() {
        for t in BadgeType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn test_badge_deserialize() {
        let json = r##"{"id":1,"platform_id":2,"type":"hours_watched","title":"Marathon","color":"#FFD700","threshold":10,"is_active":true}"##;
        let badge: Badge = serde_json::from_str(json).unwrap();
        assert_eq!(badge.badge_type, BadgeType::HoursWatched);
        assert_eq!(badge.threshold, 10);
        assert!(BADGE_COLORS.contains(&badge.color.as_str()));
    }
}
