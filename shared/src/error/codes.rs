//! Unified error codes for the course admin toolkit
//!
//! Error codes are shared by `admin-proxy`, `course-client` and the console
//! frontend. They are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Account (user / teacher) errors
//! - 3xxx: Course errors
//! - 4xxx: Module errors
//! - 5xxx: Video errors
//! - 6xxx: Badge errors
//! - 7xxx: Help content errors
//! - 8xxx: Dashboard errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Account ====================
    /// Email address is malformed
    EmailInvalid = 1001,
    /// Password is shorter than the minimum length
    PasswordTooShort = 1002,
    /// Password confirmation does not match
    PasswordMismatch = 1003,

    // ==================== 3xxx: Course ====================
    /// Course not found
    CourseNotFound = 3001,
    /// Course production status is not one of draft/inprogress/complete
    CourseInvalidStatus = 3002,

    // ==================== 4xxx: Module ====================
    /// Module not found
    ModuleNotFound = 4001,

    // ==================== 5xxx: Video ====================
    /// Video not found
    VideoNotFound = 5001,
    /// Video URL is not a YouTube link
    VideoUrlInvalid = 5002,
    /// YouTube returned no metadata for the code
    VideoMetadataNotFound = 5003,
    /// YouTube video code missing from the request
    VideoCodeMissing = 5004,

    // ==================== 6xxx: Badge ====================
    /// Badge not found
    BadgeNotFound = 6001,
    /// Badge color is outside the palette
    BadgeColorInvalid = 6002,
    /// Badge threshold must be positive
    BadgeThresholdInvalid = 6003,

    // ==================== 7xxx: Help ====================
    /// Help article (FAQ) not found
    HelpArticleNotFound = 7001,
    /// Help category not found
    HelpCategoryNotFound = 7101,

    // ==================== 8xxx: Dashboard ====================
    /// Dashboard period is not one of 7d/30d/month/all
    DashboardPeriodInvalid = 8001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
    /// Operation timed out
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Upstream (third-party) service failed
    UpstreamError = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Account
            ErrorCode::EmailInvalid => "Email address is invalid",
            ErrorCode::PasswordTooShort => "Password must be at least 6 characters",
            ErrorCode::PasswordMismatch => "Passwords do not match",

            // Course
            ErrorCode::CourseNotFound => "Course not found",
            ErrorCode::CourseInvalidStatus => "Course status is invalid",

            // Module
            ErrorCode::ModuleNotFound => "Module not found",

            // Video
            ErrorCode::VideoNotFound => "Video not found",
            ErrorCode::VideoUrlInvalid => "Video URL must be a YouTube link",
            ErrorCode::VideoMetadataNotFound => "Video not found on YouTube",
            ErrorCode::VideoCodeMissing => "YouTube video code was not provided",

            // Badge
            ErrorCode::BadgeNotFound => "Badge not found",
            ErrorCode::BadgeColorInvalid => "Badge color is not in the palette",
            ErrorCode::BadgeThresholdInvalid => "Badge threshold must be at least 1",

            // Help
            ErrorCode::HelpArticleNotFound => "Help article not found",
            ErrorCode::HelpCategoryNotFound => "Help category not found",

            // Dashboard
            ErrorCode::DashboardPeriodInvalid => "Dashboard period is invalid",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::UpstreamError => "Upstream service error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Account
            1001 => Ok(ErrorCode::EmailInvalid),
            1002 => Ok(ErrorCode::PasswordTooShort),
            1003 => Ok(ErrorCode::PasswordMismatch),

            // Course
            3001 => Ok(ErrorCode::CourseNotFound),
            3002 => Ok(ErrorCode::CourseInvalidStatus),

            // Module
            4001 => Ok(ErrorCode::ModuleNotFound),

            // Video
            5001 => Ok(ErrorCode::VideoNotFound),
            5002 => Ok(ErrorCode::VideoUrlInvalid),
            5003 => Ok(ErrorCode::VideoMetadataNotFound),
            5004 => Ok(ErrorCode::VideoCodeMissing),

            // Badge
            6001 => Ok(ErrorCode::BadgeNotFound),
            6002 => Ok(ErrorCode::BadgeColorInvalid),
            6003 => Ok(ErrorCode::BadgeThresholdInvalid),

            // Help
            7001 => Ok(ErrorCode::HelpArticleNotFound),
            7101 => Ok(ErrorCode::HelpCategoryNotFound),

            // Dashboard
            8001 => Ok(ErrorCode::DashboardPeriodInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::UpstreamError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
