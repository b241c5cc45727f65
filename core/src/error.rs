use crate::notice::NoticeLevel;

/// A rejected user action.
///
/// None of these escape a handler: the UI turns each one into an inline
/// message plus a toast. Only [`DrishtiError::AccountLocked`] survives
/// resubmission; it clears on logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DrishtiError {
    #[error("Please complete the CAPTCHA verification")]
    MissingConsent,
    #[error("Full Name must contain only alphabetic characters")]
    InvalidName,
    #[error("Email must be from an approved organizational domain")]
    DisallowedEmailDomain,
    #[error("Please select at least one data subscription")]
    NoSubscriptionSelected,
    #[error("Invalid file format")]
    UnsupportedFileExtension,
    #[error("Please enter a location name")]
    EmptySearchQuery,
    #[error("Account Locked")]
    AccountLocked,
}

impl DrishtiError {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Self::MissingConsent | Self::NoSubscriptionSelected => {
                NoticeLevel::Warning
            }
            _ => NoticeLevel::Error,
        }
    }

    /// True when correcting the input cannot clear the error.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::AccountLocked)
    }

    /// Secondary line shown under the message, where the UI has one.
    pub fn detail(&self) -> Option<&'static str> {
        match self {
            Self::AccountLocked => Some(
                "Too many failed attempts. Please reset your password or \
                 contact support.",
            ),
            Self::UnsupportedFileExtension => Some(
                "Supported: KML, KMZ, GeoJSON, JSON, TXT, Shapefile (.zip)",
            ),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}
