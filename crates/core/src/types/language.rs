//! UI language selection.

use serde::{Deserialize, Serialize};

/// The two languages the portal renders in.
///
/// Toggling is a simple two-way switch; the active language lives in the
/// visitor's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Gujarati.
    Gu,
}

impl Language {
    /// BCP 47 language code for the `<html lang>` attribute.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Gu => "gu",
        }
    }

    /// The other language.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::En => Self::Gu,
            Self::Gu => Self::En,
        }
    }

    /// Label for the language toggle button, matching the header widget.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        match self {
            Self::En => "EN | ગુ",
            Self::Gu => "ગુ | EN",
        }
    }
}
