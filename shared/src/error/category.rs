//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Account errors
/// - 3xxx: Course errors
/// - 4xxx: Module errors
/// - 5xxx: Video errors
/// - 6xxx: Badge errors
/// - 7xxx: Help content errors
/// - 8xxx: Dashboard errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Account errors (1xxx)
    Account,
    /// Course errors (3xxx)
    Course,
    /// Module errors (4xxx)
    Module,
    /// Video errors (5xxx)
    Video,
    /// Badge errors (6xxx)
    Badge,
    /// Help content errors (7xxx)
    Help,
    /// Dashboard errors (8xxx)
    Dashboard,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Account,
            2000..4000 => Self::Course,
            4000..5000 => Self::Module,
            5000..6000 => Self::Video,
            6000..7000 => Self::Badge,
            7000..8000 => Self::Help,
            8000..9000 => Self::Dashboard,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Account => "account",
            Self::Course => "course",
            Self::Module => "module",
            Self::Video => "video",
            Self::Badge => "badge",
            Self::Help => "help",
            Self::Dashboard => "dashboard",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1002), ErrorCategory::Account);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Course);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Module);
        assert_eq!(ErrorCategory::from_code(5003), ErrorCategory::Video);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Badge);
        assert_eq!(ErrorCategory::from_code(7101), ErrorCategory::Help);
        assert_eq!(ErrorCategory::from_code(8001), ErrorCategory::Dashboard);
        assert_eq!(ErrorCategory::from_code(9006), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::EmailInvalid.category(), ErrorCategory::Account);
        assert_eq!(ErrorCode::CourseNotFound.category(), ErrorCategory::Course);
        assert_eq!(ErrorCode::ModuleNotFound.category(), ErrorCategory::Module);
        assert_eq!(ErrorCode::VideoUrlInvalid.category(), ErrorCategory::Video);
        assert_eq!(ErrorCode::UpstreamError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Help).unwrap();
        assert_eq!(json, "\"help\"");

        let category: ErrorCategory = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(category, ErrorCategory::Video);
        assert_eq!(category.name(), "video");
    }
}
