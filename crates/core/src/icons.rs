//! Closed registry of icon identifiers the frontend can render.
//!
//! Service and why-us rows store an icon key as text. Writes normalize the
//! inbound key through [`Icon::from_key`] so the stored value always maps to
//! a renderable icon; unknown keys fall back to [`Icon::Coffee`] instead of
//! breaking the public page.

use serde::{Deserialize, Serialize};

/// Icon identifiers known to the site renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Icon {
    Coffee,
    Users,
    Heart,
    Building,
    Award,
    Clock,
    Shield,
    Sparkles,
}

impl Icon {
    /// Resolve an icon key case-insensitively. Unknown keys map to the
    /// fallback icon, so this is total over arbitrary input.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "coffee" => Self::Coffee,
            "users" => Self::Users,
            "heart" => Self::Heart,
            // "Building2" is the legacy key some stored rows still carry.
            "building" | "building2" => Self::Building,
            "award" => Self::Award,
            "clock" => Self::Clock,
            "shield" => Self::Shield,
            "sparkles" => Self::Sparkles,
            _ => Self::Coffee,
        }
    }

    /// Canonical wire form stored in the database and served to the page.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Coffee => "Coffee",
            Self::Users => "Users",
            Self::Heart => "Heart",
            Self::Building => "Building2",
            Self::Award => "Award",
            Self::Clock => "Clock",
            Self::Shield => "Shield",
            Self::Sparkles => "Sparkles",
        }
    }
}

/// Normalize an arbitrary icon key to its canonical stored form.
pub fn normalize_icon_key(key: &str) -> String {
    Icon::from_key(key).as_key().to_string()
}
