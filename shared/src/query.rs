//! Cache keys of API reads
//!
//! Every write reports the keys it makes stale; views holding data under
//! those keys re-fetch.

use std::fmt;

use crate::models::DashboardPeriod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Courses,
    Course(i64),
    Badges,
    HelpArticles,
    HelpCategories,
    Dashboard(DashboardPeriod),
    Users,
    Teachers,
}

impl QueryKey {
    /// Keys made stale by any change inside a course (modules, videos, order)
    pub fn course_tree(course_id: i64) -> Vec<QueryKey> {
        vec![Self::Course(course_id), Self::Courses]
    }

    /// Whether invalidating `self` also invalidates `other`
    ///
    /// `Courses` covers every `Course(_)` entry.
    pub fn covers(&self, other: &QueryKey) -> bool {
        self == other || matches!((self, other), (Self::Courses, Self::Course(_)))
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Courses => f.write_str("courses"),
            Self::Course(id) => write!(f, "courses/{id}"),
            Self::Badges => f.write_str("badges"),
            Self::HelpArticles => f.write_str("help-articles"),
            Self::HelpCategories => f.write_str("help-categories"),
            Self::Dashboard(period) => write!(f, "dashboard/{period}"),
            Self::Users => f.write_str("users"),
            Self::Teachers => f.write_str("teachers"),
        }
    }
}
