//! Status enums for directory records.

use serde::{Deserialize, Serialize};

/// Membership status shown in the member directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Membership has been reviewed and accepted.
    Active,
    /// Registration submitted, awaiting committee review.
    #[default]
    Pending,
}

impl MemberStatus {
    /// Translation key for the status badge.
    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
        }
    }

    /// The lowercase tag used in badge CSS classes.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
        }
    }
}

/// Category of a notice board entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeCategory {
    /// Community events (gatherings, festivals).
    Event,
    /// Student and member achievements.
    Achievement,
    /// Donation drives and acknowledgements.
    Donation,
    /// General updates.
    Update,
}

impl NoticeCategory {
    /// The lowercase tag used in badges and filters.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Achievement => "achievement",
            Self::Donation => "donation",
            Self::Update => "update",
        }
    }
}

impl std::fmt::Display for NoticeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NoticeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "event" => Ok(Self::Event),
            "achievement" => Ok(Self::Achievement),
            "donation" => Ok(Self::Donation),
            "update" => Ok(Self::Update),
            _ => Err(format!("invalid notice category: {s}")),
        }
    }
}
