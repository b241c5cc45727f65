use derive_more::Display;

use crate::error::DrishtiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NoticeLevel {
    #[display("INFO")]
    Info,
    #[display("SUCCESS")]
    Success,
    #[display("WARNING")]
    Warning,
    #[display("ERROR")]
    Error,
}

/// A short user-facing message. Shown as a toast and echoed to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn log(&self) {
        match self.level {
            NoticeLevel::Info | NoticeLevel::Success => {
                tracing::info!("[{}] {}", self.level, self.message)
            }
            NoticeLevel::Warning => {
                tracing::warn!("[{}] {}", self.level, self.message)
            }
            NoticeLevel::Error => {
                tracing::error!("[{}] {}", self.level, self.message)
            }
        }
    }
}

impl From<DrishtiError> for Notice {
    fn from(error: DrishtiError) -> Self {
        Self::new(error.level(), error.to_string())
    }
}
