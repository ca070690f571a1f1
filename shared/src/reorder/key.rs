use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// Drag handle identifier: `module-{id}` or `video-{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortableKey {
    Module(i64),
    Video(i64),
}

impl SortableKey {
    pub fn id(&self) -> i64 {
        match self {
            Self::Module(id) | Self::Video(id) => *id,
        }
    }
}

impl fmt::Display for SortableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module(id) => write!(f, "module-{id}"),
            Self::Video(id) => write!(f, "video-{id}"),
        }
    }
}

impl FromStr for SortableKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            AppError::with_message(ErrorCode::InvalidFormat, "Invalid sortable key")
                .with_detail("key", s)
        };
        let (kind, id) = s.split_once('-').ok_or_else(invalid)?;
        let id: i64 = id.parse().map_err(|_| invalid())?;
        match kind {
            "module" => Ok(Self::Module(id)),
            "video" => Ok(Self::Video(id)),
            _ => Err(invalid()),
        }
    }
}
